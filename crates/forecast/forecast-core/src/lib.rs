//! Forecast Core
//!
//! Core implementations for selecting a jurisdiction's series, filling its
//! gaps and forecasting it with a cube-root seasonal ARIMA.

pub mod forecaster;
pub mod interpolate;
pub mod pipeline;
pub mod selector;

// Re-export SPI types for implementations
pub use forecast_spi::{
    CleanedSeries, CleaningPolicy, ForecastError, ForecastResult, Horizon, PipelineStep, Result,
    SeriesQuery,
};

// Re-export main types
pub use forecaster::{get_prediction, graph_stat, Forecaster, ORDER, SEASONAL_ORDER};
pub use interpolate::interpolate_interior;
pub use pipeline::{CubeRootStep, Pipeline};
pub use selector::{resolve_statistic, select_series};
