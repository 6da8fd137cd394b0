//! Data Source Core
//!
//! Implementations for loading the OxCGRT tracker table:
//!
//! - [`reader`]: header-driven CSV parsing with lenient row handling
//! - [`snapshot`]: writing (and, with `fetch`, refreshing) the local snapshot
//! - [`source`]: [`DataSource`](data_spi::DataSource) implementations
//! - [`config`]: where to fetch from and where the snapshot lives

pub mod config;
pub mod reader;
pub mod snapshot;
pub mod source;

pub use config::{SourceConfig, SourceConfigBuilder, DEFAULT_CACHE_PATH, DEFAULT_DATA_URL};
pub use reader::{parse_date, read_observations};
pub use snapshot::write_snapshot;
pub use source::{CachedSource, CsvFileSource};

#[cfg(feature = "fetch")]
pub use snapshot::download_latest;
#[cfg(feature = "fetch")]
pub use source::{fetch_csv, RemoteCsvSource};
