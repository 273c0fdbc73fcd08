/// Word-count pipeline: normalize -> map -> shuffle -> reduce.
///
/// The stages run strictly in that order over an in-memory text:
/// - **Normalize** (caller thread): strip punctuation, lowercase, split,
///   drop stop words.
/// - **Map** (worker pool): each token becomes a `(word, 1)` pair.
/// - **Shuffle** (caller thread): pairs are grouped by word. This is the
///   barrier between the two parallel stages.
/// - **Reduce** (worker pool): each group's counts are summed.
///
/// A [`WordCountPipeline`] owns one [`WorkerPool`] for its whole lifetime;
/// both parallel stages borrow it. The final word -> count mapping does not
/// depend on how the pool schedules work, since addition is commutative
/// and associative.
pub mod map;
pub mod normalize;
pub mod reduce;
pub mod shuffle;

use crate::error::Result;
use crate::model::{FrequencyResult, Token};
use crate::pool::WorkerPool;
use std::time::Instant;
use tracing::debug;

pub use normalize::{normalize, STOP_WORDS};

pub struct WordCountPipeline {
    pool: WorkerPool,
}

impl WordCountPipeline {
    /// Create a pipeline backed by `workers` threads (`0` = one per CPU).
    pub fn new(workers: usize) -> Result<Self> {
        Ok(Self {
            pool: WorkerPool::new(workers)?,
        })
    }

    /// Number of worker threads used by the parallel stages.
    pub fn workers(&self) -> usize {
        self.pool.size()
    }

    /// Count the words of `text`.
    ///
    /// Empty text, or text made only of stop words and punctuation, yields
    /// an empty result.
    pub fn run(&self, text: &str) -> FrequencyResult {
        let start = Instant::now();
        let tokens = normalize(text);
        debug!(
            "Normalized {} bytes into {} tokens in {:?}",
            text.len(),
            tokens.len(),
            start.elapsed()
        );
        self.run_tokens(tokens)
    }

    /// Run stages 2-4 over tokens that are already normalized.
    pub fn run_tokens(&self, tokens: Vec<Token>) -> FrequencyResult {
        if tokens.is_empty() {
            debug!("No tokens to count");
            return FrequencyResult::new();
        }

        let stage = Instant::now();
        let pairs = map::map_stage(&self.pool, tokens);
        debug!("Mapped {} pairs in {:?}", pairs.len(), stage.elapsed());

        let stage = Instant::now();
        let groups = shuffle::shuffle(pairs);
        debug!("Shuffled into {} groups in {:?}", groups.len(), stage.elapsed());

        let stage = Instant::now();
        let result = reduce::reduce_stage(&self.pool, groups);
        debug!(
            "Reduced {} words ({} occurrences) in {:?}",
            result.len(),
            result.total(),
            stage.elapsed()
        );

        result
    }

    /// Release the worker pool. Dropping the pipeline has the same effect.
    pub fn shutdown(self) {
        self.pool.shutdown();
    }
}

/// Run the full pipeline once over `text` with a dedicated pool.
pub fn count_words(text: &str, workers: usize) -> Result<FrequencyResult> {
    let pipeline = WordCountPipeline::new(workers)?;
    let result = pipeline.run(text);
    pipeline.shutdown();
    Ok(result)
}
