//! Substring pre-filtering of a clue table.

use tracing::debug;

use crate::types::ClueRecord;

/// Restrict `records` to rows whose answer (respectively clue) contains
/// the given substring, case-insensitively.
///
/// Both terms `None` returns the input unchanged. The answer filter is
/// applied first and drops rows with a missing answer; the clue filter is
/// then applied to the result, so setting both yields the conjunction.
pub fn subset(
    records: Vec<ClueRecord>,
    ans_term: Option<&str>,
    clue_term: Option<&str>,
) -> Vec<ClueRecord> {
    if ans_term.is_none() && clue_term.is_none() {
        return records;
    }

    let mut rows = records;

    if let Some(term) = ans_term {
        let term = term.to_lowercase();
        rows.retain(|r| contains_ci(r.answer.as_deref(), &term));
        debug!(term = %term, rows = rows.len(), "applied answer filter");
    }
    if let Some(term) = clue_term {
        let term = term.to_lowercase();
        rows.retain(|r| contains_ci(r.clue.as_deref(), &term));
        debug!(term = %term, rows = rows.len(), "applied clue filter");
    }

    rows
}

fn contains_ci(field: Option<&str>, lowered_term: &str) -> bool {
    field.is_some_and(|text| text.to_lowercase().contains(lowered_term))
}
