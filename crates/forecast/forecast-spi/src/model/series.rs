//! Cleaned series

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{ForecastError, Result};

/// Dated values with strictly increasing dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleanedSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl CleanedSeries {
    /// Build a series, checking lengths and date order.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::invalid_parameter(
                "values",
                format!("{} values for {} dates", values.len(), dates.len()),
            ));
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ForecastError::invalid_parameter(
                "dates",
                "must be strictly increasing",
            ));
        }
        Ok(Self { dates, values })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
