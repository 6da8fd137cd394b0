//! Series query and cleaning policy

use data_spi::{Statistic, STATE_NONE};
use serde::{Deserialize, Serialize};

/// Which rows survive cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningPolicy {
    /// Drop missing and non-positive values. Input to the forecaster.
    Forecast,
    /// Drop missing values only. Input to plotting.
    Display,
}

impl CleaningPolicy {
    /// Whether a projected value is kept.
    pub fn keeps(self, value: Option<f64>) -> bool {
        match (self, value) {
            (_, None) => false,
            (CleaningPolicy::Forecast, Some(v)) => v > 0.0,
            (CleaningPolicy::Display, Some(_)) => true,
        }
    }
}

/// Treat empty strings and the `"None"` sentinel (any case) as no state.
pub fn normalize_state(state: Option<&str>) -> Option<String> {
    state
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(STATE_NONE))
        .map(str::to_string)
}

/// One jurisdiction's series of one statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesQuery {
    country: String,
    state: Option<String>,
    statistic: Statistic,
}

impl SeriesQuery {
    pub fn new(country: impl Into<String>, state: Option<&str>, statistic: Statistic) -> Self {
        Self {
            country: country.into(),
            state: normalize_state(state),
            statistic,
        }
    }

    /// Country-level query.
    pub fn national(country: impl Into<String>, statistic: Statistic) -> Self {
        Self::new(country, None, statistic)
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn statistic(&self) -> Statistic {
        self.statistic
    }
}
