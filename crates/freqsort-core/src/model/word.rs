/// Intermediate records that flow between pipeline stages.
use super::Token;
use serde::Serialize;

/// Lightweight index into the shuffle stage's group arena.
///
/// Uses `u32` to keep the word index map small; four billion distinct
/// words is far beyond any text this tool will see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupIndex(pub u32);

impl GroupIndex {
    #[inline]
    pub fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize, "GroupIndex overflow");
        Self(index as u32)
    }

    #[inline]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Output of the map stage: one word occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedPair {
    pub word: Token,
    /// Always 1 as produced by the mapper.
    pub count: u64,
}

impl MappedPair {
    #[inline]
    pub fn one(word: Token) -> Self {
        Self { word, count: 1 }
    }
}

/// Output of the shuffle stage: every occurrence of one word, not yet summed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShuffledGroup {
    pub word: Token,
    /// One entry per occurrence, in the order the pairs were shuffled.
    pub counts: Vec<u64>,
}

/// Output of the reduce stage: a word and its total count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: Token,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: Token, count: u64) -> Self {
        Self { word, count }
    }
}
