/// Text sources: where the word-count pipeline gets its input.
///
/// A failed fetch is an error for the caller to report. The pipeline only
/// ever sees text from a successful fetch, so there is no partial result.
use crate::error::{Error, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Request timeout for HTTP sources.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Anything that can produce a body of text from a location string.
pub trait TextSource {
    fn fetch(&self, location: &str) -> Result<String>;
}

/// Fetches text over HTTP(S) with a blocking client.
pub struct HttpTextSource {
    client: reqwest::blocking::Client,
}

impl HttpTextSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

impl TextSource for HttpTextSource {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let fetch_err = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().map_err(fetch_err)?;
        info!("Fetched {} bytes from {url}", text.len());
        Ok(text)
    }
}

/// Reads text from a local UTF-8 file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTextSource;

impl TextSource for FileTextSource {
    fn fetch(&self, path: &str) -> Result<String> {
        let text = std::fs::read_to_string(Path::new(path)).map_err(|e| Error::io(path, e))?;
        info!("Read {} bytes from {path}", text.len());
        Ok(text)
    }
}
