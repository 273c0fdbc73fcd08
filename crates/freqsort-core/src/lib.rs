/// freqsort core: the word-count pipeline and the file-extension sorter.
///
/// This crate contains all business logic with no terminal, argument
/// parsing, or log-sink dependencies, so it can sit behind any frontend.
///
/// # Modules
///
/// - [`model`]: tokens, intermediate pairs/groups, and `FrequencyResult`.
/// - [`pipeline`]: normalize -> map -> shuffle -> reduce.
/// - [`pool`]: fixed-size worker pool and `parallel_map`.
/// - [`analysis`]: ranking of finished results (top N words).
/// - [`fetch`]: text sources (HTTP, local file).
/// - [`export`]: CSV and JSON output of results.
/// - [`sorter`]: parallel copy of a source tree into extension buckets.
/// - [`error`]: the crate's error type.
pub mod analysis;
pub mod error;
pub mod export;
pub mod fetch;
pub mod model;
pub mod pipeline;
pub mod pool;
pub mod sorter;

pub use error::{Error, Result};
