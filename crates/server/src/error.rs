//! API error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forecast_facade::ForecastError;
use serde::Serialize;
use thiserror::Error;

/// Errors a request can end in
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No data available for this selection")]
    SelectionEmpty,

    #[error("Forecast unavailable: {0}")]
    ModelFit(String),

    #[error("{0}")]
    InvalidParameter(String),

    #[error("Forecast did not finish within {0} seconds")]
    Timeout(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SelectionEmpty => StatusCode::NOT_FOUND,
            ApiError::ModelFit(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::SelectionEmpty => "selection_empty",
            ApiError::ModelFit(_) => "model_fit",
            ApiError::InvalidParameter(_) => "invalid_parameter",
            ApiError::Timeout(_) => "timeout",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<ForecastError> for ApiError {
    fn from(error: ForecastError) -> Self {
        match error {
            ForecastError::SelectionEmpty { .. } => ApiError::SelectionEmpty,
            ForecastError::ModelFit(inner) => ApiError::ModelFit(inner.to_string()),
            invalid @ ForecastError::InvalidParameter { .. } => {
                ApiError::InvalidParameter(invalid.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_facade::TsError;

    #[test]
    fn test_forecast_errors_map_to_status() {
        let empty: ApiError = ForecastError::SelectionEmpty {
            country: "Wakanda".to_string(),
            state: None,
        }
        .into();
        assert_eq!(empty.status(), StatusCode::NOT_FOUND);
        assert_eq!(empty.to_string(), "No data available for this selection");

        let fit: ApiError = ForecastError::ModelFit(TsError::NotFitted).into();
        assert_eq!(fit.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(fit.to_string().starts_with("Forecast unavailable"));

        let invalid: ApiError = ForecastError::invalid_parameter("horizon", "must be at least 1 day").into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code(), "invalid_parameter");
    }

    #[test]
    fn test_timeout_status() {
        let error = ApiError::Timeout(30);
        assert_eq!(error.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(error.to_string(), "Forecast did not finish within 30 seconds");
    }
}
