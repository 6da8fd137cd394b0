//! Contracts implemented by data sources.

mod data_source;

pub use data_source::DataSource;
