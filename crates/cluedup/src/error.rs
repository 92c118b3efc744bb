use thiserror::Error;

pub type Result<T> = std::result::Result<T, CluedupError>;

#[derive(Debug, Error)]
pub enum CluedupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("similarity index build failed: {0}")]
    IndexBuild(String),
}
