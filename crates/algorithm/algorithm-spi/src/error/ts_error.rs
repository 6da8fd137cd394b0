//! Time series error types
//!
//! Defines the standardized error type for all algorithm operations.

use thiserror::Error;

/// Result type alias for algorithm operations
pub type Result<T> = std::result::Result<T, TsError>;

/// Errors that can occur during time series operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Optimizer gave up without a usable estimate
    #[error("Optimization failed to converge after {iterations} iterations")]
    ConvergenceFailure { iterations: usize },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Invalid time series data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = TsError::InsufficientData {
            required: 48,
            actual: 20,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 48 points, got 20"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = TsError::InvalidParameter {
            name: "period".to_string(),
            reason: "must be at least 2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'period': must be at least 2"
        );
    }

    #[test]
    fn test_not_fitted_display() {
        assert_eq!(
            TsError::NotFitted.to_string(),
            "Model must be fitted before prediction"
        );
    }

    #[test]
    fn test_convergence_failure_display() {
        let error = TsError::ConvergenceFailure { iterations: 150 };
        assert_eq!(
            error.to_string(),
            "Optimization failed to converge after 150 iterations"
        );
    }

    #[test]
    fn test_numerical_and_data_display() {
        assert_eq!(
            TsError::NumericalError("non-finite residuals".to_string()).to_string(),
            "Numerical error: non-finite residuals"
        );
        assert_eq!(
            TsError::InvalidData("series is constant".to_string()).to_string(),
            "Invalid data: series is constant"
        );
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = TsError::InsufficientData {
            required: 10,
            actual: 5,
        };
        assert_eq!(error.clone(), error);
        assert_ne!(error, TsError::NotFitted);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> = Box::new(TsError::NotFitted);
        assert!(error.to_string().contains("fitted"));
    }
}
