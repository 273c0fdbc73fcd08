/// Source-tree walk using `jwalk` and copy planning.
///
/// The walk runs to completion before any copy starts, so files written
/// into the output folder during the run are never picked up again even
/// when the output folder sits inside the source tree. An output folder
/// left over from an earlier run inside the source is skipped outright.
use super::bucket::destination;
use super::progress::SortProgress;
use crossbeam_channel::Sender;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error};

/// All sources that map to one destination path, in walk order.
///
/// Copies into the same destination run one after another so the last file
/// walked wins, rather than two copies interleaving their writes.
#[derive(Debug)]
pub struct CopyPlan {
    pub destination: PathBuf,
    pub sources: Vec<PathBuf>,
}

/// Result of walking the source tree.
#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub plans: Vec<CopyPlan>,
    /// Number of files found.
    pub files: u64,
    /// Entries that could not be read.
    pub errors: u64,
    pub cancelled: bool,
}

/// Walk `source` and plan a copy into `output` for every file found.
///
/// Directory read errors are logged, reported on `progress_tx`, and
/// counted; the walk carries on past them.
pub fn plan_copies(
    source: &Path,
    output: &Path,
    skip_under: Option<&Path>,
    progress_tx: &Sender<SortProgress>,
    cancel_flag: &AtomicBool,
) -> WalkOutcome {
    let mut outcome = WalkOutcome::default();
    // Destination -> index into `outcome.plans`.
    let mut dest_map: HashMap<PathBuf, usize> = HashMap::new();
    let mut visited: u64 = 0;

    let walker = jwalk::WalkDir::new(source)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::RayonNewPool(num_cpus::get()));

    for entry_result in walker {
        visited += 1;
        if visited.is_multiple_of(1_000) && cancel_flag.load(Ordering::Relaxed) {
            outcome.cancelled = true;
            return outcome;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                outcome.errors += 1;
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                error!("Error reading {}: {err}", path.display());
                let _ = progress_tx.send(SortProgress::Error {
                    path,
                    message: err.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if let Some(skip) = skip_under {
            if path.starts_with(skip) {
                continue;
            }
        }
        if !is_copyable_file(&entry.file_type(), &path) {
            continue;
        }

        let Some(dest) = destination(&path, output) else {
            continue;
        };
        outcome.files += 1;
        match dest_map.get(&dest) {
            Some(&idx) => outcome.plans[idx].sources.push(path),
            None => {
                dest_map.insert(dest.clone(), outcome.plans.len());
                outcome.plans.push(CopyPlan {
                    destination: dest,
                    sources: vec![path],
                });
            }
        }
    }

    debug!(
        "Walk of {} found {} files for {} destinations",
        source.display(),
        outcome.files,
        outcome.plans.len()
    );
    outcome
}

/// Regular files and symlinks are copied, except symlinks to directories.
/// A dangling symlink is planned too, so its failed copy is reported.
fn is_copyable_file(file_type: &std::fs::FileType, path: &Path) -> bool {
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && !std::fs::metadata(path).is_ok_and(|m| m.is_dir())
}
