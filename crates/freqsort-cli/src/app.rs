/// Entry points for the two binaries.
///
/// Each `run_*` function wires core collaborators together: argument
/// values in, a summary or result out. Logging must already be initialised.
use crate::args::{SortArgs, WordFreqArgs};
use crate::chart;
use anyhow::{bail, Context};
use freqsort_core::export;
use freqsort_core::fetch::{FileTextSource, HttpTextSource, TextSource};
use freqsort_core::model::FrequencyResult;
use freqsort_core::pipeline::WordCountPipeline;
use freqsort_core::sorter::progress::{SortProgress, SortSummary};
use freqsort_core::sorter::start_sort;
use std::io::Write;
use tracing::{error, info, warn};

/// Copy every file under `source_folder` into extension buckets under
/// `output_folder`.
///
/// Per-file failures are logged by the sorter and counted in the summary;
/// they do not make this function fail. A sort that cannot start (e.g. a
/// missing source folder) is logged and yields an empty summary.
pub fn run_sort_files(args: &SortArgs) -> anyhow::Result<SortSummary> {
    let handle = start_sort(args.source_folder.clone(), args.output_folder.clone());

    for message in handle.progress_rx.iter() {
        match message {
            SortProgress::Copied { .. } | SortProgress::Error { .. } => continue,
            SortProgress::Complete { summary, duration } => {
                info!(
                    "Sorted {} files ({} bytes) in {:?}, {} failed",
                    summary.copied, summary.bytes, duration, summary.failed
                );
                return Ok(summary);
            }
            SortProgress::Cancelled { summary } => {
                warn!("Sort cancelled after {} files", summary.copied);
                return Ok(summary);
            }
            SortProgress::Failed { message } => {
                error!("Nothing sorted from {}: {message}", args.source_folder.display());
                return Ok(SortSummary::default());
            }
        }
    }
    bail!("sorter stopped without reporting a result")
}

/// Pick the text source for `args`: a local file when `--file` is given,
/// otherwise the HTTP source. Returns the source and the location to fetch.
pub fn text_source(args: &WordFreqArgs) -> anyhow::Result<(Box<dyn TextSource>, String)> {
    match &args.file {
        Some(path) => Ok((Box::new(FileTextSource), path.to_string_lossy().into_owned())),
        None => Ok((Box::new(HttpTextSource::new()?), args.url.clone())),
    }
}

/// Fetch the text, count its words, and write the chart (or JSON) to `out`.
pub fn run_word_freq(args: &WordFreqArgs, out: &mut dyn Write) -> anyhow::Result<FrequencyResult> {
    let (source, location) = text_source(args)?;
    run_word_freq_with(source.as_ref(), &location, args, out)
}

/// [`run_word_freq`] with an explicit text source.
pub fn run_word_freq_with(
    source: &dyn TextSource,
    location: &str,
    args: &WordFreqArgs,
    out: &mut dyn Write,
) -> anyhow::Result<FrequencyResult> {
    let text = source
        .fetch(location)
        .with_context(|| format!("failed to fetch text from {location}"))?;

    let pipeline = WordCountPipeline::new(args.workers)?;
    let workers = pipeline.workers();
    let result = pipeline.run(&text);
    pipeline.shutdown();
    info!(
        "Counted {} distinct words ({} in total) with {workers} workers",
        result.len(),
        result.total()
    );

    if let Some(csv_path) = &args.csv {
        export::write_csv(&result, Some(args.top_n), csv_path)?;
    }

    if args.json {
        writeln!(out, "{}", export::to_json(&result)?)?;
    } else {
        write!(out, "{}", chart::render_top_words(&result, args.top_n, args.width))?;
    }
    out.flush()?;

    Ok(result)
}
