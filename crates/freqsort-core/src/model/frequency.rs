/// The final artifact of a pipeline run: word -> total count.
///
/// Entries are kept in a flat `Vec<WordCount>` in first-encountered order,
/// with a side index from word to position for O(1) lookup. Iteration order
/// is therefore deterministic for a given text, and a stable sort by count
/// breaks ties by first occurrence.
use super::{GroupIndex, Token, WordCount};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct FrequencyResult {
    entries: Vec<WordCount>,
    index: HashMap<Token, GroupIndex>,
}

impl FrequencyResult {
    /// An empty result (no words).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result from reduced counts.
    ///
    /// Position is fixed by the first appearance of each word; a repeated
    /// word has its counts added to the existing entry.
    pub fn from_counts(counts: impl IntoIterator<Item = WordCount>) -> Self {
        let counts = counts.into_iter();
        let mut result = Self {
            entries: Vec::with_capacity(counts.size_hint().0),
            index: HashMap::with_capacity(counts.size_hint().0),
        };
        for wc in counts {
            match result.index.get(wc.word.as_str()) {
                Some(&idx) => result.entries[idx.idx()].count += wc.count,
                None => {
                    result
                        .index
                        .insert(wc.word.clone(), GroupIndex::new(result.entries.len()));
                    result.entries.push(wc);
                }
            }
        }
        result
    }

    /// Total count for `word`, or `None` if it never appeared.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index.get(word).map(|idx| self.entries[idx.idx()].count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of counted tokens.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|wc| wc.count).sum()
    }

    /// Entries in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[WordCount] {
        &self.entries
    }
}

/// Equality compares the word -> count mapping and ignores entry order.
impl PartialEq for FrequencyResult {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|wc| other.get(wc.word.as_str()) == Some(wc.count))
    }
}

impl Eq for FrequencyResult {}

impl<'a> IntoIterator for &'a FrequencyResult {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Serialised as a JSON object `{ word: count, ... }` in first-encountered order.
impl Serialize for FrequencyResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for wc in &self.entries {
            map.serialize_entry(wc.word.as_str(), &wc.count)?;
        }
        map.end()
    }
}
