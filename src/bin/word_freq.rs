//! word-freq: count the words of a text and chart the most frequent ones.
//!
//! Thin binary entry point. All logic lives in the `freqsort-core`
//! and `freqsort-cli` crates.

use clap::Parser;
use freqsort_cli::config::{LOG_FILE, LOG_ROTATION_BYTES};
use freqsort_cli::logging::init_logging;
use freqsort_cli::WordFreqArgs;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let args = WordFreqArgs::parse();
    init_logging(args.verbose, Path::new(LOG_FILE), LOG_ROTATION_BYTES)?;

    tracing::info!("word-freq starting");
    let stdout = std::io::stdout();
    freqsort_cli::run_word_freq(&args, &mut stdout.lock())?;
    Ok(())
}
