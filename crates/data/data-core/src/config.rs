//! Data source configuration types.

use std::env;
use std::path::PathBuf;

use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Public location of the latest tracker export.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/OxCGRT/covid-policy-tracker/master/data/OxCGRT_latest.csv";

/// Local snapshot written by the download step.
pub const DEFAULT_CACHE_PATH: &str = "latest_covid_data.csv";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Where the observation table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Remote CSV URL
    pub url: String,
    /// Local snapshot path
    pub cache_path: PathBuf,
    /// Load the snapshot instead of fetching when it exists
    pub prefer_cache: bool,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATA_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            prefer_cache: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SourceConfig {
    /// Create a configuration for a URL and snapshot path.
    pub fn new(url: &str, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.to_string(),
            cache_path: cache_path.into(),
            ..Self::default()
        }
    }

    /// Read `COVID_DATA_URL`, `COVID_CACHE_PATH`, `COVID_PREFER_CACHE` and
    /// `COVID_FETCH_TIMEOUT_SECS`, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same keys as [`from_env`](Self::from_env), read through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = SourceConfigBuilder::new();
        if let Some(url) = lookup("COVID_DATA_URL") {
            builder = builder.url(&url);
        }
        if let Some(path) = lookup("COVID_CACHE_PATH") {
            builder = builder.cache_path(path);
        }
        if let Some(flag) = lookup("COVID_PREFER_CACHE") {
            builder = builder.prefer_cache(parse_flag("COVID_PREFER_CACHE", &flag)?);
        }
        if let Some(secs) = lookup("COVID_FETCH_TIMEOUT_SECS") {
            let secs = secs.trim().parse().map_err(|_| {
                DataError::ConfigError(format!("COVID_FETCH_TIMEOUT_SECS must be a number, got '{}'", secs))
            })?;
            builder = builder.timeout_secs(secs);
        }
        builder.build()
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(DataError::ConfigError(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

/// Builder for SourceConfig.
#[derive(Debug, Default)]
pub struct SourceConfigBuilder {
    url: Option<String>,
    cache_path: Option<PathBuf>,
    prefer_cache: Option<bool>,
    timeout_secs: Option<u64>,
}

impl SourceConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remote URL.
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Set the snapshot path.
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Choose whether an existing snapshot wins over the remote source.
    pub fn prefer_cache(mut self, prefer: bool) -> Self {
        self.prefer_cache = Some(prefer);
        self
    }

    /// Set the HTTP timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<SourceConfig> {
        let defaults = SourceConfig::default();
        let url = self.url.unwrap_or(defaults.url);
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DataError::ConfigError(format!(
                "data URL must be http(s), got '{}'",
                url
            )));
        }
        let timeout_secs = self.timeout_secs.unwrap_or(defaults.timeout_secs);
        if timeout_secs == 0 {
            return Err(DataError::ConfigError(
                "fetch timeout must be positive".to_string(),
            ));
        }
        Ok(SourceConfig {
            url,
            cache_path: self.cache_path.unwrap_or(defaults.cache_path),
            prefer_cache: self.prefer_cache.unwrap_or(defaults.prefer_cache),
            timeout_secs,
        })
    }
}
