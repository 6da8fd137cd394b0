//! Cube-root seasonal ARIMA forecaster

use algorithm_core::{ArimaOrder, Predictor, Sarima, SeasonalOrder, DEFAULT_MAX_ITERATIONS};
use chrono::Days;
use data_spi::ObservationTable;
use forecast_spi::{
    CleanedSeries, CleaningPolicy, ForecastError, ForecastResult, Horizon, Result, SeriesQuery,
};

use crate::pipeline::{CubeRootStep, Pipeline};
use crate::selector::select_series;

/// Non-seasonal order of the daily model.
pub const ORDER: ArimaOrder = ArimaOrder::new(0, 2, 0);

/// Weekly seasonal order of the daily model.
pub const SEASONAL_ORDER: SeasonalOrder = SeasonalOrder::new(3, 2, 1, 7);

/// Fits a weekly SARIMA on the cube root of a series and projects it
/// forward day by day.
#[derive(Debug, Clone, Copy)]
pub struct Forecaster {
    max_iterations: usize,
}

impl Forecaster {
    pub fn new() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Cap optimizer effort per fit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Forecast `horizon` days after the last date of `history`.
    pub fn forecast(&self, history: CleanedSeries, horizon: Horizon) -> Result<ForecastResult> {
        let last = history.last_date().ok_or_else(|| {
            ForecastError::invalid_parameter("history", "series has no observations")
        })?;

        let dates = (1..=horizon.days() as u64)
            .map(|offset| {
                last.checked_add_days(Days::new(offset)).ok_or_else(|| {
                    ForecastError::invalid_parameter("horizon", "runs past the supported calendar")
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut pipeline = Pipeline::new().with_step(CubeRootStep::new());
        let transformed = pipeline.fit_transform(history.values())?;

        let mut model = Sarima::new(ORDER, SEASONAL_ORDER)?.with_max_iterations(self.max_iterations);
        model.fit(&transformed).map_err(|e| {
            tracing::warn!(error = %e, points = history.len(), "model fit failed");
            ForecastError::ModelFit(e)
        })?;
        let projected = model.predict(horizon.days())?;
        let values = pipeline.inverse_transform(&projected)?;

        tracing::info!(
            points = history.len(),
            horizon = horizon.days(),
            from = %last,
            "forecast complete"
        );
        Ok(ForecastResult {
            history,
            dates,
            values,
        })
    }

    /// Forecast a raw day count, rejecting zero.
    pub fn forecast_days(&self, history: CleanedSeries, days: usize) -> Result<ForecastResult> {
        self.forecast(history, Horizon::new(days)?)
    }

    /// Select the query's series with the forecast cleaning policy and
    /// forecast it.
    pub fn get_prediction(
        &self,
        table: &ObservationTable,
        query: &SeriesQuery,
        horizon: Horizon,
    ) -> Result<ForecastResult> {
        let history = select_series(table, query, CleaningPolicy::Forecast)?;
        self.forecast(history, horizon)
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new()
    }
}

/// [`Forecaster::get_prediction`] with default settings.
pub fn get_prediction(
    table: &ObservationTable,
    query: &SeriesQuery,
    horizon: Horizon,
) -> Result<ForecastResult> {
    Forecaster::default().get_prediction(table, query, horizon)
}

/// The query's series cleaned for plotting.
pub fn graph_stat(table: &ObservationTable, query: &SeriesQuery) -> Result<CleanedSeries> {
    select_series(table, query, CleaningPolicy::Display)
}
