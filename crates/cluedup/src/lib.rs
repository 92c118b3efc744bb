//! cluedup - Redundancy Removal for Quiz-Bowl Clue Corpora
//!
//! A corpus of quiz-bowl clues accumulates thousands of rows that say the
//! same thing about the same answer. cluedup canonicalizes answer lines,
//! blocks rows whose answers fuzzy-match, compares clues by content-word
//! overlap, and drops every clue strictly dominated by a longer near-
//! duplicate, so a downstream flash-card generator sees each fact once.
//!
//! # Quick Start
//!
//! ```rust
//! use cluedup::{ClueRecord, DedupConfig, remove_redundancies};
//!
//! let records = vec![
//!     ClueRecord::new("wrote The Bell Jar and the collection Ariel", "Sylvia Plath", "lit"),
//!     ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
//! ];
//! let surviving = remove_redundancies(records, &DedupConfig::default())?;
//! assert_eq!(surviving.len(), 1);
//! # Ok::<(), cluedup::CluedupError>(())
//! ```
//!
//! # Architecture
//!
//! - **Text** (`text`): answer-line canonicalization and clue-bag
//!   tokenization over shared distillation primitives
//! - **Thresholds** (`thresholds`): per-length similarity cutoffs; the
//!   engine defaults to scalar cutoffs
//! - **Encoder** (`encode`): global word vocabulary plus fixed-width
//!   integer bag rows for vectorized set intersection
//! - **Similarity** (`similarity`): batched Jaro scoring over the unique
//!   canonical answers
//! - **Engine** (`core`): sorted scan with length-dominance pruning and
//!   deletion bookkeeping

pub mod core;
pub mod encode;
pub mod error;
pub mod similarity;
pub mod text;
pub mod thresholds;
pub mod types;

// Core exports
pub use error::{CluedupError, Result};
pub use types::ClueRecord;

// Engine API
pub use core::config::DedupConfig;
pub use core::engine::remove_redundancies;
pub use core::subset::subset;

// Text distillation
pub use text::{clue_bag, simplify_answer, unique_simple_answers};

// Similarity primitives
pub use similarity::{AnswerSimilarityIndex, jaro_similarity};
