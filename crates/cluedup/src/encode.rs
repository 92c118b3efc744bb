//! Numeric encoding of clue bags for fast pairwise intersection.
//!
//! A global sorted vocabulary maps every content word to an integer id,
//! and each clue bag becomes one fixed-width row of ids padded with
//! [`PAD`]. Within a row the ids are kept sorted, so the intersection
//! size of two bags is a linear merge over two short sorted slices
//! instead of a hash probe per word.

use ahash::AHashSet;

/// Sentinel filling the unused tail of each encoded row.
pub const PAD: i32 = -1;

/// Sorted array of every distinct content word observed across a corpus.
#[derive(Debug, Clone)]
pub struct VocabularyTable {
    words: Vec<String>,
}

impl VocabularyTable {
    /// Collect and sort the distinct words of all bags.
    pub fn build<'a, I>(bags: I) -> Self
    where
        I: IntoIterator<Item = &'a AHashSet<String>>,
    {
        let distinct: AHashSet<&str> = bags.into_iter().flatten().map(String::as_str).collect();
        let mut words: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        words.sort_unstable();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Id of `word`, by binary search.
    pub fn id_of(&self, word: &str) -> Option<usize> {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).ok()
    }

    pub fn word(&self, id: usize) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }
}

/// Dense `rows x width` matrix of word ids, one row per clue bag.
///
/// Row `i` holds `size(i)` sorted ids followed by [`PAD`]; an entry is
/// non-negative exactly when its column index is below `size(i)`.
#[derive(Debug, Clone)]
pub struct NumericBags {
    width: usize,
    sizes: Vec<usize>,
    cells: Vec<i32>,
}

impl NumericBags {
    /// Encode `bags` against `vocab`. Words absent from the vocabulary are
    /// skipped; when the vocabulary was built from the same bags that
    /// never happens.
    pub fn encode(vocab: &VocabularyTable, bags: &[AHashSet<String>]) -> Self {
        let width = bags.iter().map(|b| b.len()).max().unwrap_or(0);
        let mut cells = vec![PAD; bags.len() * width];
        let mut sizes = Vec::with_capacity(bags.len());

        for (i, bag) in bags.iter().enumerate() {
            let mut ids: Vec<i32> = bag
                .iter()
                .filter_map(|w| vocab.id_of(w))
                .map(|id| id as i32)
                .collect();
            ids.sort_unstable();
            let row = &mut cells[i * width..i * width + ids.len()];
            row.copy_from_slice(&ids);
            sizes.push(ids.len());
        }

        Self { width, sizes, cells }
    }

    /// Number of encoded rows.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Global row width (the largest bag size observed).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bag size of row `i`.
    pub fn size(&self, i: usize) -> usize {
        self.sizes[i]
    }

    /// The sorted id prefix of row `i` (no padding).
    pub fn ids(&self, i: usize) -> &[i32] {
        &self.cells[i * self.width..i * self.width + self.sizes[i]]
    }

    /// The full padded row `i`.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    /// `|bag_i ∩ bag_j|` by merging the two sorted id prefixes.
    pub fn shared_count(&self, i: usize, j: usize) -> usize {
        let (a, b) = (self.ids(i), self.ids(j));
        let mut shared = 0;
        let (mut x, mut y) = (0, 0);
        while x < a.len() && y < b.len() {
            match a[x].cmp(&b[y]) {
                std::cmp::Ordering::Less => x += 1,
                std::cmp::Ordering::Greater => y += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    x += 1;
                    y += 1;
                }
            }
        }
        shared
    }
}
