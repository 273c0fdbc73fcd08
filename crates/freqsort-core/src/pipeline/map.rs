/// Stage 2: tokens -> `(word, 1)` pairs, in parallel on the worker pool.
use crate::model::{MappedPair, Token};
use crate::pool::WorkerPool;

/// Map a single token to its occurrence pair.
#[inline]
pub fn map_token(token: Token) -> MappedPair {
    MappedPair::one(token)
}

/// Run the map stage over every token. Returns once all tokens are mapped.
pub fn map_stage(pool: &WorkerPool, tokens: Vec<Token>) -> Vec<MappedPair> {
    pool.map(tokens, map_token)
}
