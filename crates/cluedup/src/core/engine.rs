//! The redundancy-removal scan.
//!
//! Setup canonicalizes every answer line, sorts the table by canonical
//! answer so each fuzzy-answer block is a contiguous run, and encodes the
//! clue bags as integer rows. The scan then walks the sorted table once:
//! for each live row it computes (or reuses) the answer-similarity mask,
//! scores clue overlap against the later rows of the block, deletes
//! strictly-smaller matches, and condemns itself when any match is
//! strictly larger. Ties survive.

use ahash::{AHashMap, AHashSet};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::config::DedupConfig;
use crate::core::subset::subset;
use crate::encode::{NumericBags, VocabularyTable};
use crate::error::Result;
use crate::similarity::AnswerSimilarityIndex;
use crate::text::{clue_bag, simplify_answer};
use crate::types::ClueRecord;

/// Remove redundant rows from a clue corpus.
///
/// Returns the surviving `(clue, answer, tags)` rows in canonical-answer
/// sort order. Rows with a missing answer are dropped during setup; an
/// empty corpus (before or after filtering) yields an empty output.
///
/// # Example
///
/// ```rust
/// use cluedup::{ClueRecord, DedupConfig, remove_redundancies};
///
/// let records = vec![
///     ClueRecord::new("wrote The Bell Jar and the collection Ariel", "Sylvia Plath", "lit"),
///     ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
/// ];
/// let surviving = remove_redundancies(records, &DedupConfig::default()).unwrap();
/// assert_eq!(surviving.len(), 1);
/// ```
pub fn remove_redundancies(
    records: Vec<ClueRecord>,
    config: &DedupConfig,
) -> Result<Vec<ClueRecord>> {
    config.validate()?;

    let records = subset(
        records,
        config.ans_term.as_deref(),
        config.clue_term.as_deref(),
    );
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let table = DedupTable::derive(records, config);
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let deleted = table.scan(config)?;
    info!(
        deleted = deleted.len(),
        surviving = table.len() - deleted.len(),
        "redundant row deletion complete"
    );
    Ok(table.project(&deleted))
}

/// The working table: input rows plus derived columns, in sorted order.
///
/// Columns are parallel arrays indexed by row; they are populated once
/// here and only read during the scan.
struct DedupTable {
    records: Vec<ClueRecord>,
    simple_answer: Vec<String>,
    bags: NumericBags,
    /// Occurrences of each canonical answer, counted before rows with a
    /// missing raw answer are dropped.
    freqs: AHashMap<String, usize>,
    /// Sorted distinct canonical answers of the kept rows.
    uq_answers: Vec<String>,
    /// Position of each row's canonical answer within `uq_answers`.
    uq_idxs: Vec<usize>,
}

impl DedupTable {
    fn derive(records: Vec<ClueRecord>, config: &DedupConfig) -> Self {
        info!(rows = records.len(), "canonicalizing answer lines");
        let simple: Vec<String> = if config.simplify_answers {
            records
                .par_iter()
                .map(|r| simplify_answer(r.answer.as_deref()))
                .collect()
        } else {
            records
                .iter()
                .map(|r| r.answer.clone().unwrap_or_else(|| "nan".to_string()))
                .collect()
        };

        let mut freqs: AHashMap<String, usize> = AHashMap::new();
        for answer in &simple {
            *freqs.entry(answer.clone()).or_insert(0) += 1;
        }

        info!("sorting by canonical answer");
        let mut order: Vec<usize> = (0..records.len())
            .filter(|&i| records[i].answer.is_some())
            .collect();
        order.sort_by(|&a, &b| {
            let key_a = (&simple[a], records[a].clue.as_deref().unwrap_or(""));
            let key_b = (&simple[b], records[b].clue.as_deref().unwrap_or(""));
            if config.ascending {
                key_a.cmp(&key_b)
            } else {
                key_b.cmp(&key_a)
            }
        });

        let mut kept_records = Vec::with_capacity(order.len());
        let mut kept_simple = Vec::with_capacity(order.len());
        for &i in &order {
            kept_records.push(records[i].clone());
            kept_simple.push(simple[i].clone());
        }

        info!(rows = kept_records.len(), "encoding clue bags");
        let string_bags: Vec<_> = kept_records
            .par_iter()
            .map(|r| clue_bag(r.clue.as_deref()))
            .collect();
        let vocab = VocabularyTable::build(&string_bags);
        let bags = NumericBags::encode(&vocab, &string_bags);
        debug!(vocab = vocab.len(), width = bags.width(), "vocabulary built");

        let mut uq_answers = kept_simple.clone();
        uq_answers.sort_unstable();
        uq_answers.dedup();
        // Every kept answer is in uq_answers by construction.
        let uq_idxs: Vec<usize> = kept_simple
            .iter()
            .map(|answer| uq_answers.binary_search(answer).unwrap_or(0))
            .collect();

        Self {
            records: kept_records,
            simple_answer: kept_simple,
            bags,
            freqs,
            uq_answers,
            uq_idxs,
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One pass over the sorted rows, returning the condemned indices.
    fn scan(&self, config: &DedupConfig) -> Result<AHashSet<usize>> {
        let n = self.len();
        let index = AnswerSimilarityIndex::build(&self.uq_answers)?;

        let mut deleted: AHashSet<usize> = AHashSet::new();
        let mut ans_sim_mask = vec![false; n];
        let mut prev_answer: Option<&str> = None;

        for i in 0..n {
            if deleted.contains(&i) {
                continue;
            }
            let answer = self.simple_answer[i].as_str();
            // An empty canonical answer would block with every other empty
            // answer; treat it as un-blockable.
            if answer.is_empty() {
                continue;
            }
            if let Some(min_freq) = config.skip_thresh {
                let freq = self.freqs.get(answer).copied().unwrap_or(0);
                if freq < min_freq {
                    continue;
                }
            }

            if prev_answer != Some(answer) {
                let scores = index.query(answer);
                for (k, slot) in ans_sim_mask.iter_mut().enumerate() {
                    *slot = scores[self.uq_idxs[k]] > config.ans_thresh;
                }
                prev_answer = Some(answer);
                debug!(row = i, answer, "recomputed answer block mask");
            }

            let size_i = self.bags.size(i);
            let mut dominated = false;
            for j in (i + 1)..n {
                if !ans_sim_mask[j] {
                    continue;
                }
                let size_j = self.bags.size(j);
                let min_sz = size_i.min(size_j);
                let overlap = if min_sz == 0 {
                    1.0
                } else {
                    self.bags.shared_count(i, j) as f64 / min_sz as f64
                };
                if overlap <= config.clue_thresh {
                    continue;
                }

                if size_j < size_i {
                    if !deleted.contains(&j) {
                        deleted.insert(j);
                    }
                } else if size_j > size_i {
                    dominated = true;
                }
            }
            if dominated {
                deleted.insert(i);
            }
        }

        Ok(deleted)
    }

    /// Surviving rows, original columns only.
    fn project(self, deleted: &AHashSet<usize>) -> Vec<ClueRecord> {
        self.records
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !deleted.contains(i))
            .map(|(_, record)| record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CluedupError;

    fn run(records: Vec<ClueRecord>, config: &DedupConfig) -> Vec<ClueRecord> {
        remove_redundancies(records, config).unwrap()
    }

    fn answers(records: &[ClueRecord]) -> Vec<&str> {
        records.iter().filter_map(|r| r.answer.as_deref()).collect()
    }

    #[test]
    fn test_empty_corpus_is_not_an_error() {
        assert!(run(Vec::new(), &DedupConfig::default()).is_empty());
    }

    #[test]
    fn test_threshold_validation_happens_up_front() {
        let config = DedupConfig {
            clue_thresh: 2.0,
            ..Default::default()
        };
        let err = remove_redundancies(vec![ClueRecord::new("c", "a", "t")], &config).unwrap_err();
        assert!(matches!(err, CluedupError::ThresholdOutOfRange { .. }));
    }

    #[test]
    fn test_missing_answer_rows_are_dropped() {
        let records = vec![
            ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
            ClueRecord {
                clue: Some("orphan clue".to_string()),
                answer: None,
                tags: None,
            },
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(answers(&surviving), vec!["Sylvia Plath"]);
    }

    #[test]
    fn test_exact_duplicates_tie_and_both_survive() {
        // Equal bag sizes delete nothing; exact-duplicate collapsing is the
        // caller's concern.
        let records = vec![
            ClueRecord::new("wrote The Bell Jar and Ariel", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote The Bell Jar and Ariel", "Sylvia Plath", "lit"),
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(surviving.len(), 2);
    }

    #[test]
    fn test_low_overlap_keeps_both_but_lower_threshold_prunes() {
        // bags: {american, poet, lady, lazarus, daddy, bell, jar} and
        // {poet, ariel, hughes}; shared = {poet}, overlap = 1/3.
        let records = vec![
            ClueRecord::new(
                "American poet of Lady Lazarus Daddy and The Bell Jar",
                "Sylvia Plath",
                "lit",
            ),
            ClueRecord::new("poet of Ariel and Hughes", "Sylvia Plath", "lit"),
        ];

        let surviving = run(records.clone(), &DedupConfig::default());
        assert_eq!(surviving.len(), 2);

        let config = DedupConfig {
            clue_thresh: 0.3,
            ..Default::default()
        };
        let surviving = run(records, &config);
        assert_eq!(surviving.len(), 1);
        assert_eq!(
            surviving[0].clue.as_deref(),
            Some("American poet of Lady Lazarus Daddy and The Bell Jar")
        );
    }

    #[test]
    fn test_fuzzy_answer_variants_block_together() {
        // Canonical forms differ ("fyodordostoevsky" vs
        // "fyodordostoyevsky") but Jaro keeps them in one block, so the
        // smaller overlapping clue is pruned.
        let records = vec![
            ClueRecord::new(
                "Russian author of Crime and Punishment and Brothers Karamazov",
                "Fyodor Dostoevsky",
                "lit",
            ),
            ClueRecord::new("author of Crime and Punishment", "Fyodor Dostoyevsky", "lit"),
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(answers(&surviving), vec!["Fyodor Dostoevsky"]);
    }

    #[test]
    fn test_skip_thresh_keeps_rare_answers() {
        let records = vec![
            ClueRecord::new(
                "Russian author of Crime and Punishment and Brothers Karamazov",
                "Fyodor Dostoevsky",
                "lit",
            ),
            ClueRecord::new("author of Crime and Punishment", "Fyodor Dostoevsky", "lit"),
        ];
        let config = DedupConfig {
            skip_thresh: Some(3),
            ..Default::default()
        };
        let surviving = run(records, &config);
        assert_eq!(surviving.len(), 2);
    }

    #[test]
    fn test_empty_clues_match_but_tie() {
        let records = vec![
            ClueRecord::new("", "Sylvia Plath", "lit"),
            ClueRecord::new("", "Sylvia Plath", "lit"),
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(surviving.len(), 2);
    }

    #[test]
    fn test_empty_clue_loses_to_informative_clue() {
        let records = vec![
            ClueRecord::new("", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].clue.as_deref(), Some("wrote The Bell Jar"));
    }

    #[test]
    fn test_empty_canonical_answers_never_block() {
        // Both answers canonicalize to "", which must not form a block.
        let records = vec![
            ClueRecord::new("first clue words here", "the", "misc"),
            ClueRecord::new("more clue words", "an", "misc"),
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(surviving.len(), 2);
    }

    #[test]
    fn test_unsimplified_answers_use_raw_strings() {
        // Raw answers differ by case, so no block forms without
        // canonicalization.
        let records = vec![
            ClueRecord::new("wrote The Bell Jar and Ariel and Daddy", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote The Bell Jar", "SYLVIA PLATH", "lit"),
        ];
        let config = DedupConfig {
            simplify_answers: false,
            ..Default::default()
        };
        let surviving = run(records.clone(), &config);
        assert_eq!(surviving.len(), 2);

        let surviving = run(records, &DedupConfig::default());
        assert_eq!(surviving.len(), 1);
    }

    #[test]
    fn test_descending_sort_still_prunes_blocks() {
        let records = vec![
            ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote The Bell Jar and Ariel and Daddy", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote Crime and Punishment", "Fyodor Dostoevsky", "lit"),
        ];
        let config = DedupConfig {
            ascending: false,
            ..Default::default()
        };
        let surviving = run(records, &config);
        assert_eq!(surviving.len(), 2);
        assert_eq!(
            answers(&surviving),
            vec!["Sylvia Plath", "Fyodor Dostoevsky"]
        );
    }

    #[test]
    fn test_subset_terms_restrict_the_run() {
        let records = vec![
            ClueRecord::new("wrote The Bell Jar and Ariel and Daddy", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote Crime and Punishment", "Fyodor Dostoevsky", "lit"),
        ];
        let config = DedupConfig {
            ans_term: Some("plath".to_string()),
            ..Default::default()
        };
        let surviving = run(records, &config);
        assert_eq!(surviving.len(), 1);
        assert_eq!(
            surviving[0].clue.as_deref(),
            Some("wrote The Bell Jar and Ariel and Daddy")
        );
    }

    #[test]
    fn test_output_is_sorted_by_canonical_answer() {
        let records = vec![
            ClueRecord::new("wrote The Bell Jar", "Sylvia Plath", "lit"),
            ClueRecord::new("wrote Crime and Punishment", "Fyodor Dostoevsky", "lit"),
        ];
        let surviving = run(records, &DedupConfig::default());
        assert_eq!(
            answers(&surviving),
            vec!["Fyodor Dostoevsky", "Sylvia Plath"]
        );
    }
}
