//! Algorithm Core Implementations
//!
//! This crate provides the time series models used for forecasting:
//!
//! - [`regression`]: seasonal ARIMA estimated by conditional sum of squares
//! - [`utils`]: lag polynomials, differencing, parameter constraints
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (0..60).map(|t| (t * t) as f64).collect();
//! let mut model = Sarima::new(ArimaOrder::new(0, 2, 0), SeasonalOrder::none()).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(3).unwrap();
//! assert_eq!(forecast.len(), 3);
//! ```

pub mod regression;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{ArimaOrder, Predictor, Result, SeasonalOrder, TsError};

// Re-export implementations for convenience
pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use algorithm_spi::{ArimaOrder, Predictor, SeasonalOrder};
    pub use crate::regression::{Coefficients, Sarima};
    // Error types
    pub use algorithm_spi::{Result, TsError};
}
