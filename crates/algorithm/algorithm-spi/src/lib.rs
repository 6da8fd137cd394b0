//! Algorithm Service Provider Interface
//!
//! Defines core traits and error types for time series prediction algorithms:
//!
//! - [`Predictor`]: fit-then-predict contract every model implements
//! - [`ArimaOrder`] / [`SeasonalOrder`]: structural orders of ARIMA-family models
//! - [`TsError`]: standardized error type for all algorithm operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Predictor;
pub use error::{Result, TsError};
pub use model::{ArimaOrder, SeasonalOrder};
