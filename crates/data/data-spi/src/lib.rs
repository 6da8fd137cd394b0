//! Data Source Service Provider Interface
//!
//! Defines the observation table model and the trait data sources implement
//! to hand it over.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{Jurisdiction, Observation, ObservationTable, Statistic, STATE_NONE};
