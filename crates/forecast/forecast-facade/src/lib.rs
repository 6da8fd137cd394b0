//! Forecast Facade
//!
//! High-level API for selecting and forecasting COVID-19 series. Re-exports
//! the public types of the forecast stack for convenient usage.
//!
//! ```rust,ignore
//! use forecast_facade::prelude::*;
//!
//! let query = SeriesQuery::new("Brazil", Some("None"), Statistic::CumulativeCases);
//! let history = graph_stat(&table, &query)?;
//! let forecast = get_prediction(&table, &query, Horizon::new(30)?)?;
//! ```

// Re-export core modules for direct access
pub use forecast_core::{forecaster, interpolate, pipeline, selector};

pub use forecast_core::{
    get_prediction, graph_stat, interpolate_interior, resolve_statistic, select_series,
    CubeRootStep, Forecaster, Pipeline, ORDER, SEASONAL_ORDER,
};

// Re-export SPI types
pub use forecast_spi::{
    normalize_state, CleanedSeries, CleaningPolicy, ForecastError, ForecastResult, Horizon,
    PipelineStep, Result, SeriesQuery,
};

pub use algorithm_core::TsError;
pub use data_spi::{ObservationTable, Statistic, STATE_NONE};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        get_prediction, graph_stat, CleanedSeries, ForecastError, ForecastResult, Forecaster,
        Horizon, ObservationTable, SeriesQuery, Statistic,
    };
}
