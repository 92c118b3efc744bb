//! Stop-word sets for clue and answer-line distillation.
//!
//! Three lazily built sets: the small general set applied everywhere, the
//! answer-line set that strips accept/prompt/reject vocabulary, and the
//! extended clue set that additionally drops pronouns, auxiliaries, and
//! quiz-bowl indicator words (`figure`, `entity`, `character`, ...) which
//! carry no signal for clue comparison.

use ahash::AHashSet;
use once_cell::sync::Lazy;

/// Stop words removed from every distilled phrase.
pub static GENERAL_STOPWORDS: Lazy<AHashSet<&'static str>> =
    Lazy::new(|| ["a", "an", "and", "of", "the", "this", "these"].into_iter().collect());

/// Answer-line directive vocabulary, removed in answer mode only.
pub static ANSWER_STOPWORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    ["accept", "prompt", "reject", "directed", "antiprompt", "anti-prompt", "or"]
        .into_iter()
        .collect()
});

/// Extended set used when building clue bags: the general set plus
/// pronouns/auxiliaries and indicator words.
pub static CLUE_STOPWORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    let mut words: AHashSet<&'static str> = GENERAL_STOPWORDS.iter().copied().collect();
    words.extend([
        "that", "he", "him", "his", "she", "her", "hers", "is", "are", "work", "works", "who",
        "which", "was", "were", "one", "another", "as", "in", "when", "they", "their", "them",
        "name", "identify", "man", "mans", "from", "on", "to", "by", "with", "title", "titular",
        "those", "it", "its", "be", "at",
    ]);
    words.extend([
        "figure", "figures", "entity", "entities", "object", "objects", "substance", "substances",
        "character", "characters",
    ]);
    words
});
