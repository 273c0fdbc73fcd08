/// Sort progress reporting: lightweight messages sent from the sort
/// thread to the caller via a crossbeam channel.
use std::path::PathBuf;
use std::time::Duration;

/// Totals for one sort run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortSummary {
    /// Files copied successfully.
    pub copied: u64,
    /// Files (or unreadable directories) that could not be processed.
    pub failed: u64,
    /// Bytes written across all successful copies.
    pub bytes: u64,
    /// `true` if the run stopped early on request.
    pub cancelled: bool,
}

/// Progress updates sent from the sort thread.
#[derive(Debug)]
pub enum SortProgress {
    /// One file was copied into its bucket.
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    /// A non-fatal error; the rest of the batch carries on.
    Error { path: PathBuf, message: String },
    /// Sorting finished. Individual failures are counted in `summary`.
    Complete {
        summary: SortSummary,
        duration: Duration,
    },
    /// Sorting was cancelled before every file was processed.
    Cancelled { summary: SortSummary },
    /// Sorting could not start at all (e.g. the source folder is missing).
    Failed { message: String },
}
