/// Horizontal bar chart of word counts for the terminal.
///
/// One row per word, most frequent on top:
///
/// ```text
/// Top 3 Most Frequent Words
/// cat │██████████████████████████████ 3
/// sat │██████████ 1
/// mat │██████████ 1
/// ```
use freqsort_core::analysis::top_words;
use freqsort_core::model::{FrequencyResult, WordCount};
use std::fmt::Write;

const BAR: char = '█';
const AXIS: char = '│';

/// Chart the `top_n` most frequent words of `result`.
pub fn render_top_words(result: &FrequencyResult, top_n: usize, width: usize) -> String {
    render_bar_chart(&top_words(result, top_n), top_n, width)
}

/// Chart already-ranked `entries`. The longest bar is `width` columns;
/// any non-zero count gets at least one block.
pub fn render_bar_chart(entries: &[WordCount], top_n: usize, width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Top {top_n} Most Frequent Words");

    if entries.is_empty() {
        out.push_str("(no words)\n");
        return out;
    }

    let label_width = entries
        .iter()
        .map(|wc| wc.word.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let max_count = entries.iter().map(|wc| wc.count).max().unwrap_or(0);

    for wc in entries {
        let bar: String = std::iter::repeat(BAR)
            .take(bar_len(wc.count, max_count, width))
            .collect();
        let _ = writeln!(
            out,
            "{:<label_width$} {}{} {}",
            wc.word.as_str(),
            AXIS,
            bar,
            wc.count
        );
    }
    out
}

/// Bar length for `count`, scaled so `max_count` maps to `width`.
fn bar_len(count: u64, max_count: u64, width: usize) -> usize {
    if count == 0 || max_count == 0 || width == 0 {
        return 0;
    }
    let width = width as u64;
    let scaled = (count * width + max_count / 2) / max_count;
    scaled.clamp(1, width) as usize
}
