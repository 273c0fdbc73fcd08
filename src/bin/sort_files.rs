//! sort-files: copy a folder tree into extension-named subfolders.
//!
//! Thin binary entry point. All logic lives in the `freqsort-core`
//! and `freqsort-cli` crates.

use clap::Parser;
use freqsort_cli::config::{LOG_FILE, LOG_ROTATION_BYTES};
use freqsort_cli::logging::init_logging;
use freqsort_cli::SortArgs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = SortArgs::parse();
    init_logging(0, Path::new(LOG_FILE), LOG_ROTATION_BYTES)?;

    tracing::info!("sort-files starting");
    freqsort_cli::run_sort_files(&args)?;
    Ok(())
}
