//! Forecast result

use chrono::NaiveDate;
use serde::Serialize;

use super::series::CleanedSeries;

/// History plus projected values on the days that follow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Series the model was fitted on
    pub history: CleanedSeries,
    /// Consecutive days after the last history date
    pub dates: Vec<NaiveDate>,
    /// Forecast values, one per date
    pub values: Vec<f64>,
}

impl ForecastResult {
    /// Number of forecast days.
    pub fn horizon(&self) -> usize {
        self.dates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
