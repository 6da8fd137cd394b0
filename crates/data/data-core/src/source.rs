//! [`DataSource`] implementations.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use data_spi::{DataError, DataSource, ObservationTable, Result};

use crate::config::SourceConfig;
use crate::reader::read_observations;

/// Reads a CSV file from disk (a snapshot or a raw export).
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    /// Create a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvFileSource {
    fn name(&self) -> &str {
        "csv-file"
    }

    fn load_observations(&self) -> Result<ObservationTable> {
        let file = File::open(&self.path).map_err(|e| {
            DataError::Io(format!("cannot open {}: {}", self.path.display(), e))
        })?;
        let table = read_observations(BufReader::new(file))?;
        tracing::info!(rows = table.len(), path = %self.path.display(), "loaded tracker snapshot");
        Ok(table)
    }
}

/// Download the raw export body.
#[cfg(feature = "fetch")]
pub fn fetch_csv(url: &str, timeout: std::time::Duration) -> Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("covid-forecast/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| DataError::RequestFailed(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| DataError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::RequestFailed(format!("HTTP {} from {}", status, url)));
    }

    let body = response
        .bytes()
        .map_err(|e| DataError::RequestFailed(e.to_string()))?;
    Ok(body.to_vec())
}

/// Fetches the export over HTTP on every load.
///
/// Uses a blocking client; call it outside of an async runtime or from a
/// blocking task.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct RemoteCsvSource {
    url: String,
    timeout: std::time::Duration,
}

#[cfg(feature = "fetch")]
impl RemoteCsvSource {
    /// Create a source for `url`.
    pub fn new(url: &str, timeout: std::time::Duration) -> Self {
        Self {
            url: url.to_string(),
            timeout,
        }
    }

    /// Create a source from the URL and timeout of a configuration.
    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(&config.url, std::time::Duration::from_secs(config.timeout_secs))
    }
}

#[cfg(feature = "fetch")]
impl DataSource for RemoteCsvSource {
    fn name(&self) -> &str {
        "remote-csv"
    }

    fn load_observations(&self) -> Result<ObservationTable> {
        tracing::info!(url = %self.url, "fetching tracker export");
        let body = fetch_csv(&self.url, self.timeout)?;
        let table = read_observations(body.as_slice())?;
        tracing::info!(rows = table.len(), bytes = body.len(), "loaded tracker export");
        Ok(table)
    }
}

/// Prefers the local snapshot when it exists, otherwise fetches remotely.
#[derive(Debug, Clone)]
pub struct CachedSource {
    config: SourceConfig,
}

impl CachedSource {
    /// Create a source from a configuration.
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }

    fn use_cache(&self) -> bool {
        self.config.prefer_cache && self.config.cache_path.is_file()
    }
}

impl DataSource for CachedSource {
    fn name(&self) -> &str {
        "cached"
    }

    fn load_observations(&self) -> Result<ObservationTable> {
        if self.use_cache() {
            return CsvFileSource::new(&self.config.cache_path).load_observations();
        }
        self.load_remote()
    }
}

impl CachedSource {
    #[cfg(feature = "fetch")]
    fn load_remote(&self) -> Result<ObservationTable> {
        RemoteCsvSource::from_config(&self.config).load_observations()
    }

    #[cfg(not(feature = "fetch"))]
    fn load_remote(&self) -> Result<ObservationTable> {
        Err(DataError::ConfigError(format!(
            "no snapshot at {} and remote fetching is disabled",
            self.config.cache_path.display()
        )))
    }
}
