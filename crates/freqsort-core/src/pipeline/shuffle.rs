/// Stage 3: group mapped pairs by word.
///
/// This is the merge point between the two parallel stages and always runs
/// on a single thread. The word -> group map is a local owned by this call,
/// so no lock is involved.
///
/// Groups live in a flat `Vec<ShuffledGroup>` arena in first-encountered
/// order; `word_map` translates a word to its arena slot. The first
/// occurrence of a word pushes a new group, later ones append to its
/// `counts`.
use crate::model::{GroupIndex, MappedPair, ShuffledGroup, Token};
use std::collections::HashMap;

pub fn shuffle(pairs: Vec<MappedPair>) -> Vec<ShuffledGroup> {
    let mut groups: Vec<ShuffledGroup> = Vec::new();
    let mut word_map: HashMap<Token, GroupIndex> = HashMap::new();

    for MappedPair { word, count } in pairs {
        match word_map.get(word.as_str()) {
            Some(&idx) => groups[idx.idx()].counts.push(count),
            None => {
                word_map.insert(word.clone(), GroupIndex::new(groups.len()));
                groups.push(ShuffledGroup {
                    word,
                    counts: vec![count],
                });
            }
        }
    }

    groups
}
