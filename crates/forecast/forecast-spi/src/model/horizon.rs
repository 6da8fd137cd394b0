//! Forecast horizon

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Number of days to forecast, between one and [`Horizon::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Horizon(usize);

impl Horizon {
    /// Horizons offered in the dashboard.
    pub const CHOICES: [usize; 3] = [30, 60, 90];

    /// Longest accepted horizon in days.
    pub const MAX: usize = 366;

    pub fn new(days: usize) -> Result<Self> {
        if days == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be at least 1 day",
            ));
        }
        if days > Self::MAX {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                format!("must be at most {} days", Self::MAX),
            ));
        }
        Ok(Self(days))
    }

    pub fn days(self) -> usize {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self(Self::CHOICES[0])
    }
}

impl TryFrom<usize> for Horizon {
    type Error = ForecastError;

    fn try_from(days: usize) -> Result<Self> {
        Self::new(days)
    }
}

impl From<Horizon> for usize {
    fn from(horizon: Horizon) -> usize {
        horizon.0
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
