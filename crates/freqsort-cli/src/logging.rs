/// Logging setup: a stderr layer for the user and a size-rotated log file
/// that keeps the full debug record (including every per-file copy error).
use anyhow::Context;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Append-only log file that rotates once it would grow past `max_bytes`.
///
/// On rotation the active file is renamed to `<stem>.<YYYYmmdd_HHMMSS>.<ext>`
/// and a fresh file is opened at the original path. Rotation only happens
/// between writes, and tracing emits one write per event, so an event is
/// never split across two files.
#[derive(Clone)]
pub struct RotatingFile {
    state: Arc<Mutex<RotatingState>>,
}

struct RotatingState {
    path: PathBuf,
    file: File,
    size: u64,
    max_bytes: u64,
}

impl RotatingFile {
    /// Open (or create) `path` for appending.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64) -> io::Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            state: Arc::new(Mutex::new(RotatingState {
                path,
                file,
                size,
                max_bytes,
            })),
        })
    }

    /// Path of the active log file.
    pub fn path(&self) -> PathBuf {
        self.state.lock().path.clone()
    }
}

impl RotatingState {
    fn write_event(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.size > 0 && self.size + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.size += buf.len() as u64;
        Ok(())
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let target = rotated_path(&self.path, &timestamp);
        std::fs::rename(&self.path, &target)?;
        self.file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)?;
        self.size = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Name for a rotated copy of `path`, e.g. `debug.log` ->
/// `debug.20240101_120000.log`. A numeric suffix is added if several
/// rotations land in the same second.
fn rotated_path(path: &Path, timestamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "log".to_string());
    let ext = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut candidate = path.with_file_name(format!("{stem}.{timestamp}{ext}"));
    let mut n = 1;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{stem}.{timestamp}-{n}{ext}"));
        n += 1;
    }
    candidate
}

/// Writer handed to the fmt layer for one event.
pub struct RotatingWriter<'a> {
    state: &'a Mutex<RotatingState>,
}

impl Write for RotatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.lock().write_event(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.lock().file.flush()
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriter { state: &self.state }
    }
}

/// Stderr level for a `-v` count, used when `RUST_LOG` is not set.
pub fn stderr_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialise tracing for a binary.
///
/// Stderr honours `RUST_LOG`, falling back to [`stderr_level`]. The log file
/// always records `debug` and above, without ANSI colours.
pub fn init_logging(verbose: u8, log_path: &Path, rotation_bytes: u64) -> anyhow::Result<()> {
    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(stderr_level(verbose)));
    let log_file = RotatingFile::open(log_path, rotation_bytes)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(verbose >= 2)
                .with_thread_names(verbose >= 2)
                .with_filter(stderr_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(LevelFilter::DEBUG),
        )
        .try_init()
        .context("failed to initialise logging")?;

    debug!("Logging to {} (verbosity {verbose})", log_path.display());
    Ok(())
}
