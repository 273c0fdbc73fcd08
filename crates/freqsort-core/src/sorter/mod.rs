/// Sorter module: copies every file of a source tree into extension-named
/// buckets under an output folder.
///
/// Runs in two phases:
/// - **Walk:** `jwalk` parallel traversal of the source tree, planning one
///   copy per file (see [`walk`]).
/// - **Copy:** the planned copies run in parallel on rayon. Each copy is
///   isolated: a failure is logged with the file path and cause, reported
///   on the progress channel, and counted, while sibling copies carry on.
///
/// [`start_sort`] runs both phases on a background thread and reports
/// through a bounded channel; [`sort_folder`] is the synchronous form.
pub mod bucket;
pub mod progress;
pub mod walk;

use crate::error::{Error, Result};
use progress::{SortProgress, SortSummary};

use crossbeam_channel::{Receiver, Sender};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{error, info};

pub use bucket::{bucket_name, NO_EXTENSION};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Copy workers block on `send` once the channel is full, so a slow
/// consumer throttles the sort instead of growing the heap.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed sort. Allows cancellation and
/// receiving progress updates.
pub struct SortHandle {
    /// Receiver for progress updates from the sort thread.
    pub progress_rx: Receiver<SortProgress>,
    /// Flag to request cancellation.
    cancel_flag: Arc<AtomicBool>,
    /// Join handle for the sort thread.
    _thread: Option<thread::JoinHandle<()>>,
}

impl SortHandle {
    /// Request the sort to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }
}

/// Start sorting `source` into `output` on a background thread.
///
/// The last message on the channel is always one of `Complete`,
/// `Cancelled`, or `Failed`.
pub fn start_sort(source: PathBuf, output: PathBuf) -> SortHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<SortProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("freqsort-sorter".into())
        .spawn(move || {
            info!(
                "Sorting files from {} into {}",
                source.display(),
                output.display()
            );
            let start = Instant::now();
            match sort_folder(&source, &output, &progress_tx, &cancel_clone) {
                Ok(summary) if summary.cancelled => {
                    let _ = progress_tx.send(SortProgress::Cancelled { summary });
                }
                Ok(summary) => {
                    let _ = progress_tx.send(SortProgress::Complete {
                        summary,
                        duration: start.elapsed(),
                    });
                }
                Err(err) => {
                    error!("Sort failed: {err}");
                    let _ = progress_tx.send(SortProgress::Failed {
                        message: err.to_string(),
                    });
                }
            }
        })
        .expect("failed to spawn sorter thread");

    SortHandle {
        progress_rx,
        cancel_flag,
        _thread: Some(thread),
    }
}

/// Sort `source` into `output` on the calling thread (copies still run on
/// rayon's pool).
///
/// Only an unusable `source` is an error. Per-file failures are counted
/// in the returned summary and reported on `progress_tx`.
pub fn sort_folder(
    source: &Path,
    output: &Path,
    progress_tx: &Sender<SortProgress>,
    cancel_flag: &AtomicBool,
) -> Result<SortSummary> {
    let source = validate_source(source)?;
    // An output folder from an earlier run may live inside the source tree.
    let skip_under = output.canonicalize().ok();

    let outcome = walk::plan_copies(
        &source,
        output,
        skip_under.as_deref(),
        progress_tx,
        cancel_flag,
    );

    let copied = AtomicU64::new(0);
    let failed = AtomicU64::new(outcome.errors);
    let bytes = AtomicU64::new(0);

    if !outcome.cancelled {
        outcome.plans.par_iter().for_each(|plan| {
            for src in &plan.sources {
                if cancel_flag.load(Ordering::Relaxed) {
                    return;
                }
                match bucket::copy_into_bucket(src, &plan.destination) {
                    Ok(n) => {
                        info!("Copied {} to {}", src.display(), plan.destination.display());
                        copied.fetch_add(1, Ordering::Relaxed);
                        bytes.fetch_add(n, Ordering::Relaxed);
                        let _ = progress_tx.send(SortProgress::Copied {
                            source: src.clone(),
                            destination: plan.destination.clone(),
                            bytes: n,
                        });
                    }
                    Err(err) => {
                        error!("Error copying {}: {err}", src.display());
                        failed.fetch_add(1, Ordering::Relaxed);
                        let _ = progress_tx.send(SortProgress::Error {
                            path: src.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        });
    }

    let summary = SortSummary {
        copied: copied.into_inner(),
        failed: failed.into_inner(),
        bytes: bytes.into_inner(),
        cancelled: outcome.cancelled || cancel_flag.load(Ordering::Relaxed),
    };
    info!(
        "Sort finished: {} copied, {} failed, {} bytes",
        summary.copied, summary.failed, summary.bytes
    );
    Ok(summary)
}

/// Resolve `source` to a canonical directory path.
fn validate_source(source: &Path) -> Result<PathBuf> {
    let canonical = source.canonicalize().map_err(|e| Error::InvalidSource {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    if !canonical.is_dir() {
        return Err(Error::InvalidSource {
            path: source.to_path_buf(),
            reason: "not a directory".into(),
        });
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run(source: &Path, output: &Path) -> (SortSummary, Vec<SortProgress>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let cancel = AtomicBool::new(false);
        let summary = sort_folder(source, output, &tx, &cancel).unwrap();
        drop(tx);
        (summary, rx.into_iter().collect())
    }

    #[test]
    fn files_are_copied_into_extension_buckets() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("a.txt"), b"aa").unwrap();
        fs::write(src.join("nested").join("b.rs"), b"bbb").unwrap();
        fs::write(src.join("README"), b"r").unwrap();

        let (summary, messages) = run(&src, &out);

        assert_eq!(summary.copied, 3);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.bytes, 6);
        assert!(!summary.cancelled);
        assert_eq!(fs::read(out.join("txt").join("a.txt")).unwrap(), b"aa");
        assert_eq!(fs::read(out.join("rs").join("b.rs")).unwrap(), b"bbb");
        assert!(out.join(NO_EXTENSION).join("README").exists());
        let copied = messages
            .iter()
            .filter(|m| matches!(m, SortProgress::Copied { .. }))
            .count();
        assert_eq!(copied, 3);
    }

    #[test]
    fn missing_source_is_invalid() {
        let tmp = tempfile::TempDir::new().unwrap();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let err = sort_folder(
            &tmp.path().join("nope"),
            &tmp.path().join("out"),
            &tx,
            &AtomicBool::new(false),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSource { .. }), "got {err:?}");
    }

    #[test]
    fn file_as_source_is_invalid() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let err = sort_folder(&file, &tmp.path().join("out"), &tx, &AtomicBool::new(false))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSource { .. }));
    }

    /// Two files with the same name in different folders share a
    /// destination; the one walked last wins and both count as copied.
    #[test]
    fn name_collisions_overwrite_in_walk_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(src.join("a")).unwrap();
        fs::create_dir_all(src.join("b")).unwrap();
        fs::write(src.join("a").join("same.txt"), b"from a").unwrap();
        fs::write(src.join("b").join("same.txt"), b"from b").unwrap();

        let (summary, _) = run(&src, &out);

        assert_eq!(summary.copied, 2);
        assert_eq!(fs::read(out.join("txt").join("same.txt")).unwrap(), b"from b");
    }

    /// An output folder inside the source from an earlier run is not re-sorted.
    #[test]
    fn existing_output_inside_source_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().to_path_buf();
        let out = src.join("sorted");
        fs::write(src.join("a.txt"), b"a").unwrap();

        let (first, _) = run(&src, &out);
        assert_eq!(first.copied, 1);

        let (second, _) = run(&src, &out);
        assert_eq!(second.copied, 1, "sorted/txt/a.txt must not be copied again");
    }

    #[test]
    fn pre_cancelled_sort_copies_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), b"a").unwrap();

        let (tx, _rx) = crossbeam_channel::unbounded();
        let cancel = AtomicBool::new(true);
        let summary = sort_folder(&src, &out, &tx, &cancel).unwrap();
        assert!(summary.cancelled);
        assert_eq!(summary.copied, 0);
        assert!(!out.exists());
    }

    /// A symlink whose target is gone fails on its own; other files still copy.
    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reported_as_failed_copy() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("good.txt"), b"ok").unwrap();
        let dangling = src.join("dangling.txt");
        std::os::unix::fs::symlink(src.join("nowhere"), &dangling).unwrap();

        let (summary, messages) = run(&src, &out);

        assert_eq!(summary.copied, 1);
        assert_eq!(summary.failed, 1);
        let failed: Vec<&PathBuf> = messages
            .iter()
            .filter_map(|m| match m {
                SortProgress::Error { path, .. } => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].ends_with("dangling.txt"), "got {failed:?}");
        assert!(!out.join("txt").join("dangling.txt").exists());
    }

    /// Symlinks to directories are neither followed nor copied.
    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        let elsewhere = tmp.path().join("elsewhere");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&elsewhere).unwrap();
        fs::write(elsewhere.join("hidden.txt"), b"x").unwrap();
        std::os::unix::fs::symlink(&elsewhere, src.join("link")).unwrap();

        let (summary, messages) = run(&src, &out);

        assert_eq!(summary, SortSummary::default());
        assert!(messages.is_empty());
    }

    /// A symlink to a regular file copies the target's content.
    #[cfg(unix)]
    #[test]
    fn symlink_to_file_copies_target() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(&src).unwrap();
        let target = tmp.path().join("target.md");
        fs::write(&target, b"# hi").unwrap();
        std::os::unix::fs::symlink(&target, src.join("alias.md")).unwrap();

        let (summary, _) = run(&src, &out);

        assert_eq!(summary.copied, 1);
        assert_eq!(fs::read(out.join("md").join("alias.md")).unwrap(), b"# hi");
    }

    #[test]
    fn empty_source_copies_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        let (summary, messages) = run(&src, &tmp.path().join("out"));
        assert_eq!(summary, SortSummary::default());
        assert!(messages.is_empty());
    }
}
