//! Structural orders of ARIMA-family models.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TsError};

/// Non-seasonal (p, d, q) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArimaOrder {
    /// Autoregressive terms
    pub p: usize,
    /// Differencing passes
    pub d: usize,
    /// Moving-average terms
    pub q: usize,
}

impl ArimaOrder {
    /// Create an order.
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

/// Seasonal (P, D, Q, s) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonalOrder {
    /// Seasonal autoregressive terms
    pub p: usize,
    /// Seasonal differencing passes
    pub d: usize,
    /// Seasonal moving-average terms
    pub q: usize,
    /// Season length in observations
    pub period: usize,
}

impl SeasonalOrder {
    /// Create a seasonal order.
    pub const fn new(p: usize, d: usize, q: usize, period: usize) -> Self {
        Self { p, d, q, period }
    }

    /// No seasonal component.
    pub const fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// True if any seasonal term or difference is requested.
    pub fn is_seasonal(&self) -> bool {
        self.p + self.d + self.q > 0
    }

    /// Reject seasonal terms without a usable period.
    pub fn validate(&self) -> Result<()> {
        if self.is_seasonal() && self.period < 2 {
            return Err(TsError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2 when seasonal terms are present".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SeasonalOrder {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.p, self.d, self.q)
    }
}

impl std::fmt::Display for SeasonalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{},{})", self.p, self.d, self.q, self.period)
    }
}
