//! Forecast error types

use algorithm_spi::TsError;
use thiserror::Error;

/// Errors that can occur while selecting or forecasting a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Selection produced no usable rows
    #[error("No data available for this selection")]
    SelectionEmpty {
        country: String,
        state: Option<String>,
    },

    /// The model could not be fitted or could not forecast
    #[error("Forecast unavailable: {0}")]
    ModelFit(#[from] TsError),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ForecastError {
    /// Shorthand for [`ForecastError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_empty_message() {
        let error = ForecastError::SelectionEmpty {
            country: "Wakanda".to_string(),
            state: None,
        };
        assert_eq!(error.to_string(), "No data available for this selection");
    }

    #[test]
    fn test_model_fit_wraps_ts_error() {
        let error: ForecastError = TsError::InsufficientData {
            required: 48,
            actual: 12,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Forecast unavailable: Insufficient data: need at least 48 points, got 12"
        );
        assert!(matches!(error, ForecastError::ModelFit(TsError::InsufficientData { .. })));
    }

    #[test]
    fn test_invalid_parameter_message() {
        let error = ForecastError::invalid_parameter("horizon", "must be at least 1 day");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'horizon': must be at least 1 day"
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        let error = ForecastError::ModelFit(TsError::NotFitted);
        assert!(error.source().is_some());
        let empty = ForecastError::SelectionEmpty {
            country: "X".to_string(),
            state: Some("Y".to_string()),
        };
        assert!(empty.source().is_none());
    }
}
