//! Defaults shared by both binaries.

/// Text counted by `word-freq` when neither `--url` nor `--file` is given.
pub const DEFAULT_URL: &str = "https://gutenberg.net.au/ebooks01/0100021.txt";

/// Number of words shown in the chart.
pub const DEFAULT_TOP_N: usize = 10;

/// Maximum bar length in terminal columns.
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Log file written next to the working directory.
pub const LOG_FILE: &str = "debug.log";

/// Size at which the log file is rotated: 10 MiB.
pub const LOG_ROTATION_BYTES: u64 = 10 * 1024 * 1024;
