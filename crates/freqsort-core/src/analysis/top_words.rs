/// Top-N most frequent words.
///
/// Ranks the entries of a `FrequencyResult` for the presentation layer.
use crate::model::{FrequencyResult, WordCount};

/// Get the `n` most frequent words, highest count first.
///
/// Uses a stable sort over the result's first-encountered order, so words
/// with equal counts keep the order in which they first appeared in the
/// text. Unlike a partial `select_nth_unstable` pass this keeps ties
/// reproducible. `n == 0` returns an empty vec.
pub fn top_words(result: &FrequencyResult, n: usize) -> Vec<WordCount> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<WordCount> = result.iter().cloned().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Token;

    fn example() -> FrequencyResult {
        FrequencyResult::from_counts(vec![
            WordCount::new(Token::new("cat"), 3),
            WordCount::new(Token::new("sat"), 1),
            WordCount::new(Token::new("mat"), 1),
            WordCount::new(Token::new("ran"), 1),
        ])
    }

    /// `cat` ranks first; among the count-1 ties the first encountered wins.
    #[test]
    fn top_two_of_example() {
        let top = top_words(&example(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], WordCount::new(Token::new("cat"), 3));
        assert_eq!(top[1], WordCount::new(Token::new("sat"), 1));
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let top = top_words(&example(), 10);
        let words: Vec<&str> = top.iter().map(|wc| wc.word.as_str()).collect();
        assert_eq!(words, ["cat", "sat", "mat", "ran"]);
    }

    #[test]
    fn n_larger_than_result_returns_everything() {
        assert_eq!(top_words(&example(), 100).len(), 4);
    }

    #[test]
    fn zero_n_returns_empty() {
        assert!(top_words(&example(), 0).is_empty());
    }

    #[test]
    fn empty_result_returns_empty() {
        assert!(top_words(&FrequencyResult::new(), 5).is_empty());
    }

    #[test]
    fn sorted_by_count_descending() {
        let result = FrequencyResult::from_counts(vec![
            WordCount::new(Token::new("low"), 1),
            WordCount::new(Token::new("high"), 9),
            WordCount::new(Token::new("mid"), 4),
        ]);
        let counts: Vec<u64> = top_words(&result, 3).iter().map(|wc| wc.count).collect();
        assert_eq!(counts, [9, 4, 1]);
    }
}
