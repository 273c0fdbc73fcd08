/// freqsort CLI: the terminal frontend for both tools.
///
/// This crate owns argument parsing, logging sinks, and chart output.
/// Business logic lives in `freqsort-core`.
pub mod app;
pub mod args;
pub mod chart;
pub mod config;
pub mod logging;

pub use app::{run_sort_files, run_word_freq};
pub use args::{SortArgs, WordFreqArgs};
