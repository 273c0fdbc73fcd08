/// Command-line arguments for the two binaries.
use crate::config::{DEFAULT_BAR_WIDTH, DEFAULT_TOP_N, DEFAULT_URL};
use clap::Parser;
use std::path::PathBuf;

/// Copy every file of a folder tree into subfolders named after each
/// file's extension.
#[derive(Parser, Debug, Clone)]
#[command(name = "sort-files", version)]
pub struct SortArgs {
    /// Source folder to read files from.
    pub source_folder: PathBuf,

    /// Destination folder to copy files to.
    pub output_folder: PathBuf,
}

/// Count word frequencies in a text and chart the most frequent words.
#[derive(Parser, Debug, Clone)]
#[command(name = "word-freq", version)]
pub struct WordFreqArgs {
    /// URL of the text to analyse.
    #[arg(long, default_value = DEFAULT_URL, conflicts_with = "file")]
    pub url: String,

    /// Read the text from a local file instead of fetching it.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of top words to show.
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Worker threads for the map and reduce stages (0 = one per CPU).
    #[arg(long, default_value_t = 0)]
    pub workers: usize,

    /// Maximum bar length in columns.
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    pub width: usize,

    /// Print every word count as JSON instead of the chart.
    #[arg(long)]
    pub json: bool,

    /// Also write the ranked top-N table to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
