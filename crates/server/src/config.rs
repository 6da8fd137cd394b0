//! Server configuration from the environment

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use data_core::SourceConfig;
use data_spi::DataError;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_ITERATIONS: usize = 150;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors raised at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Invalid data source configuration: {0}")]
    Source(#[from] DataError),
}

/// Everything the server reads from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub source: SourceConfig,
    pub max_iterations: usize,
    pub forecast_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            source: SourceConfig::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            forecast_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `FORECAST_MAX_ITERATIONS`, `FORECAST_TIMEOUT_SECS`
    /// and the data source variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => parse_number("PORT", raw)?,
            None => defaults.port,
        };
        let max_iterations = match lookup("FORECAST_MAX_ITERATIONS") {
            Some(raw) => parse_positive("FORECAST_MAX_ITERATIONS", raw)?,
            None => defaults.max_iterations,
        };
        let forecast_timeout = match lookup("FORECAST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("FORECAST_TIMEOUT_SECS", raw)?),
            None => defaults.forecast_timeout,
        };

        let source = SourceConfig::from_lookup(&lookup)?;

        let config = Self {
            host,
            port,
            source,
            max_iterations,
            forecast_timeout,
        };
        config.socket_addr()?;
        Ok(config)
    }

    /// Address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::Invalid {
                key: "HOST",
                value: self.host.clone(),
                reason: "not a valid IP address",
            })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: raw,
        reason: "must be a non-negative integer",
    })
}

fn parse_positive<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let value: T = parse_number(key, raw.clone())?;
    if value <= T::default() {
        return Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_iterations, 150);
        assert_eq!(config.forecast_timeout, Duration::from_secs(30));
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("FORECAST_MAX_ITERATIONS", "40"),
            ("FORECAST_TIMEOUT_SECS", "5"),
            ("COVID_CACHE_PATH", "/srv/covid.csv"),
            ("COVID_PREFER_CACHE", "false"),
        ]))
        .unwrap();
        assert_eq!(config.source.cache_path, std::path::PathBuf::from("/srv/covid.csv"));
        assert!(!config.source.prefer_cache);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
        assert_eq!(config.max_iterations, 40);
        assert_eq!(config.forecast_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values() {
        for pairs in [
            [("PORT", "eighty")],
            [("FORECAST_MAX_ITERATIONS", "0")],
            [("FORECAST_TIMEOUT_SECS", "-3")],
            [("HOST", "not an ip")],
        ] {
            let error = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(error, ConfigError::Invalid { .. }), "{pairs:?}");
        }
    }

    #[test]
    fn test_invalid_source_values() {
        let error = ServerConfig::from_lookup(lookup(&[("COVID_DATA_URL", "ftp://host/x.csv")]))
            .unwrap_err();
        assert!(matches!(error, ConfigError::Source(_)));
    }
}
