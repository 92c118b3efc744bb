//! Core record type shared by the engine, the subsetter, and the CLI harness.

use serde::{Deserialize, Serialize};

/// One row of a clue corpus.
///
/// `clue` is a free-text hint fragment, `answer` is the accepted answer line
/// (possibly carrying bracketed alternates and reject instructions), and
/// `tags` is an opaque string carried through unchanged. A `None` field
/// models a missing value; the TSV boundary round-trips missing values as
/// the literal token `nan`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClueRecord {
    pub clue: Option<String>,
    pub answer: Option<String>,
    pub tags: Option<String>,
}

impl ClueRecord {
    pub fn new(
        clue: impl Into<String>,
        answer: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            clue: Some(clue.into()),
            answer: Some(answer.into()),
            tags: Some(tags.into()),
        }
    }
}
