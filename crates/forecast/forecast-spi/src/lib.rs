//! Forecast Service Provider Interface
//!
//! Defines the request and result types of the selection and forecasting
//! stages, and the trait for reversible preprocessing steps.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::PipelineStep;
pub use error::{ForecastError, Result};
pub use model::{
    normalize_state, CleanedSeries, CleaningPolicy, ForecastResult, Horizon, SeriesQuery,
};
