//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CluedupError, Result};
use crate::thresholds::{DEFAULT_ANS_THRESH, DEFAULT_CLUE_THRESH};

/// Knobs for one redundancy-removal run.
///
/// # Example
///
/// ```rust
/// use cluedup::DedupConfig;
///
/// let config = DedupConfig {
///     skip_thresh: Some(3),
///     clue_thresh: 0.55,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Restrict the run to rows whose answer contains this substring
    /// (case-insensitive).
    #[serde(default)]
    pub ans_term: Option<String>,

    /// Restrict the run to rows whose clue contains this substring
    /// (case-insensitive).
    #[serde(default)]
    pub clue_term: Option<String>,

    /// Minimum occurrence count of a canonical answer for its rows to be
    /// scanned; rarer answers are unconditionally kept.
    #[serde(default)]
    pub skip_thresh: Option<usize>,

    /// Answer-similarity cutoff; two answers block together when their
    /// Jaro score exceeds this.
    #[serde(default = "default_ans_thresh")]
    pub ans_thresh: f64,

    /// Clue-overlap cutoff; two clues match when their overlap
    /// coefficient exceeds this.
    #[serde(default = "default_clue_thresh")]
    pub clue_thresh: f64,

    /// Canonicalize answer lines before blocking. When false, the raw
    /// answer string is the block key.
    #[serde(default = "default_true")]
    pub simplify_answers: bool,

    /// Sort canonical answers ascending (true) or descending (false).
    #[serde(default = "default_true")]
    pub ascending: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            ans_term: None,
            clue_term: None,
            skip_thresh: None,
            ans_thresh: DEFAULT_ANS_THRESH,
            clue_thresh: DEFAULT_CLUE_THRESH,
            simplify_answers: true,
            ascending: true,
        }
    }
}

impl DedupConfig {
    /// Reject thresholds outside `[0, 1]` before any work starts.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("ans_thresh", self.ans_thresh), ("clue_thresh", self.clue_thresh)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CluedupError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

fn default_ans_thresh() -> f64 {
    DEFAULT_ANS_THRESH
}

fn default_clue_thresh() -> f64 {
    DEFAULT_CLUE_THRESH
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DedupConfig::default();
        assert_eq!(config.ans_thresh, 0.70);
        assert_eq!(config.clue_thresh, 0.60);
        assert!(config.simplify_answers);
        assert!(config.ascending);
        assert!(config.skip_thresh.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = DedupConfig {
            ans_thresh: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CluedupError::ThresholdOutOfRange { name: "ans_thresh", .. })
        ));

        let config = DedupConfig {
            clue_thresh: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: DedupConfig = serde_json::from_str(r#"{"clue_thresh": 0.55}"#).unwrap();
        assert_eq!(config.clue_thresh, 0.55);
        assert_eq!(config.ans_thresh, 0.70);
        assert!(config.ascending);
    }
}
