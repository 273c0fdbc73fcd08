/// Stage 4: sum each group's counts, in parallel across groups.
///
/// Groups are disjoint and read-only here, so each one is an independent
/// unit of work for the pool.
use crate::model::{FrequencyResult, ShuffledGroup, WordCount};
use crate::pool::WorkerPool;

/// Collapse one group into `(word, total)`.
#[inline]
pub fn reduce_group(group: ShuffledGroup) -> WordCount {
    let total = group.counts.iter().sum();
    WordCount::new(group.word, total)
}

/// Run the reduce stage and assemble the final result.
///
/// The pool keeps input order, so the result iterates in the shuffle's
/// first-encountered order.
pub fn reduce_stage(pool: &WorkerPool, groups: Vec<ShuffledGroup>) -> FrequencyResult {
    FrequencyResult::from_counts(pool.map(groups, reduce_group))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    fn group(word: &str, counts: Vec<u64>) -> ShuffledGroup {
        ShuffledGroup {
            word: Token::new(word),
            counts,
        }
    }

    #[test]
    fn group_counts_are_summed() {
        let wc = reduce_group(group("cat", vec![1, 1, 1]));
        assert_eq!(wc.word.as_str(), "cat");
        assert_eq!(wc.count, 3);
    }

    /// The reducer sums whatever counts it is given, not just ones.
    #[test]
    fn non_unit_counts_are_summed() {
        assert_eq!(reduce_group(group("mat", vec![2, 5])).count, 7);
    }

    #[test]
    fn reduce_stage_builds_result_in_group_order() {
        let pool = WorkerPool::new(2).unwrap();
        let result = reduce_stage(
            &pool,
            vec![group("cat", vec![1, 1, 1]), group("sat", vec![1])],
        );
        assert_eq!(result.get("cat"), Some(3));
        assert_eq!(result.get("sat"), Some(1));
        assert_eq!(result.as_slice()[0].word.as_str(), "cat");
    }

    #[test]
    fn reduce_stage_of_nothing_is_empty() {
        let pool = WorkerPool::new(1).unwrap();
        assert!(reduce_stage(&pool, Vec::new()).is_empty());
    }
}
