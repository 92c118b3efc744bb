//! Batched Jaro similarity over the unique canonical answers.
//!
//! The index holds one precomputed [`rapidfuzz`] comparator per unique
//! string, so a single query scores against every indexed string without
//! re-deriving the query's character statistics each time. Scores are
//! classical Jaro (no Winkler prefix bonus). Results come back in build
//! order: the index is order-stable by construction, so no permutation
//! between query-result order and indexed order is ever needed.

use rapidfuzz::distance::jaro;
use rayon::prelude::*;

use crate::error::{CluedupError, Result};

/// Immutable one-to-many Jaro scorer over a set of canonical answers.
pub struct AnswerSimilarityIndex {
    keys: Vec<String>,
    scorers: Vec<jaro::BatchComparator<char>>,
}

impl std::fmt::Debug for AnswerSimilarityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerSimilarityIndex")
            .field("keys", &self.keys)
            .finish()
    }
}

impl AnswerSimilarityIndex {
    /// Build from the distinct canonical answers, typically pre-sorted by
    /// the engine. Fails on an empty input set.
    pub fn build(unique: &[String]) -> Result<Self> {
        if unique.is_empty() {
            return Err(CluedupError::IndexBuild(
                "no unique canonical answers to index".to_string(),
            ));
        }
        let scorers = unique
            .iter()
            .map(|s| jaro::BatchComparator::new(s.chars()))
            .collect();
        Ok(Self {
            keys: unique.to_vec(),
            scorers,
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The indexed strings, in score order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Jaro similarity of `query` against every indexed string, in index
    /// order. `scores[k]` corresponds to `keys()[k]`.
    pub fn query(&self, query: &str) -> Vec<f64> {
        self.scorers
            .par_iter()
            .map(|scorer| scorer.similarity(query.chars()))
            .collect()
    }
}

/// One-off classical Jaro similarity between two strings.
pub fn jaro_similarity(a: &str, b: &str) -> f64 {
    jaro::similarity(a.chars(), b.chars())
}
