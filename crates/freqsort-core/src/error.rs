/// Error type shared by every fallible operation in the core crate.
///
/// The pipeline stages themselves are total functions and never produce
/// one of these; errors come from the collaborators around the pipeline
/// (text sources, the worker pool, exports, and the sorter's roots).
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The server answered, but not with a success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sorter was pointed at something that is not a readable directory.
    #[error("invalid source folder {}: {reason}", path.display())]
    InvalidSource { path: PathBuf, reason: String },
}

impl Error {
    /// Wrap an `io::Error` together with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
