//! Distillation of answer lines and clues into comparable forms.
//!
//! Both modes share one primitive chain: coerce missing input to the
//! literal `nan`, case-fold, transliterate to ASCII, drop bracketed
//! asides, strip punctuation, split, and filter stop words. Answer mode
//! additionally truncates everything after a reject clause ("do not
//! accept ...", "reject ...") and joins the surviving tokens into a
//! single canonical string; clue mode returns the token set.

use ahash::AHashSet;
use once_cell::sync::Lazy;
use regex::Regex;
use unidecode::unidecode;

use super::stopwords::{ANSWER_STOPWORDS, CLUE_STOPWORDS, GENERAL_STOPWORDS};
use crate::types::ClueRecord;

/// Canonical answers are capped at this many characters.
pub const MAX_SIMPLE_ANSWER_LEN: usize = 51;

/// Everything from a reject clause onward is discarded in answer mode.
/// Applied after bracket removal, so a reject directive inside an aside
/// is gone before this pattern is consulted.
static REJECT_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:(?:do not|don['’]t)\s(?:accept|prompt|take)|reject)\s").unwrap()
});

/// Non-nested `[...]`, `(...)`, `{...}` runs.
static BRACKETED_ASIDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\[]+\]|\([^(]+\)|\{[^{]+\}").unwrap());

/// Knobs for [`distill`]. The engine always uses the defaults (with
/// `answerline` flipped for answer mode); `remove_brackets: false` is a
/// raw mode kept public for callers that want asides preserved.
#[derive(Debug, Clone)]
pub struct DistillOptions {
    pub answerline: bool,
    pub remove_brackets: bool,
    pub max_length: usize,
}

impl Default for DistillOptions {
    fn default() -> Self {
        Self {
            answerline: false,
            remove_brackets: true,
            max_length: MAX_SIMPLE_ANSWER_LEN,
        }
    }
}

/// Lowercase and transliterate to ASCII. Punctuation survives this step;
/// bracket and reject handling still need it.
fn fold_case(phrase: &str) -> String {
    unidecode(&phrase.to_lowercase())
}

fn strip_reject_clause(phrase: &str) -> &str {
    match REJECT_CLAUSE.find(phrase) {
        Some(m) => &phrase[..m.start()],
        None => phrase,
    }
}

/// Drop every character that is not alphanumeric, `_`, or whitespace.
fn strip_punctuation(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Distill a phrase into a canonical joined-token string.
///
/// Missing input becomes the literal `"nan"` before any other step, so a
/// row with no answer still produces a stable key.
pub fn distill(phrase: Option<&str>, opts: &DistillOptions) -> String {
    let phrase = phrase.unwrap_or("nan");
    let mut folded = fold_case(phrase);
    if opts.remove_brackets {
        folded = BRACKETED_ASIDE.replace_all(&folded, "").into_owned();
    }
    if opts.answerline {
        folded = strip_reject_clause(&folded).to_string();
    }
    let folded = strip_punctuation(&folded);

    let mut out = String::new();
    for token in folded.split_whitespace() {
        if GENERAL_STOPWORDS.contains(token) {
            continue;
        }
        if opts.answerline && ANSWER_STOPWORDS.contains(token) {
            continue;
        }
        out.push_str(token);
    }
    if out.len() > opts.max_length {
        out.truncate(opts.max_length);
    }
    out
}

/// Canonicalize an answer line (answer mode with defaults).
pub fn simplify_answer(answer: Option<&str>) -> String {
    distill(
        answer,
        &DistillOptions {
            answerline: true,
            ..Default::default()
        },
    )
}

/// Distill a clue into its bag: the set of distinct content words after
/// extended stop-word removal.
pub fn clue_bag(clue: Option<&str>) -> AHashSet<String> {
    let folded = fold_case(clue.unwrap_or("nan"));
    let folded = BRACKETED_ASIDE.replace_all(&folded, "");
    let folded = strip_punctuation(&folded);

    folded
        .split_whitespace()
        .filter(|token| !CLUE_STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// The sorted distinct canonical answers of a corpus.
pub fn unique_simple_answers(records: &[ClueRecord]) -> Vec<String> {
    let set: AHashSet<String> = records
        .iter()
        .map(|r| simplify_answer(r.answer.as_deref()))
        .collect();
    let mut answers: Vec<String> = set.into_iter().collect();
    answers.sort_unstable();
    answers
}
