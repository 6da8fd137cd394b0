//! Data error types.

use thiserror::Error;

/// Data source errors.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to read a local file
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse the CSV payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A column the table needs is absent from the header row
    #[error("Missing column '{0}'")]
    MissingColumn(String),

    /// Invalid date format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// No data returned
    #[error("No data returned")]
    NoData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error() {
        let error = DataError::RequestFailed("Connection timeout".to_string());
        assert_eq!(error.to_string(), "Request failed: Connection timeout");
    }

    #[test]
    fn test_parse_error() {
        let error = DataError::ParseError("unterminated quote".to_string());
        assert_eq!(error.to_string(), "Parse error: unterminated quote");
    }

    #[test]
    fn test_missing_column_error() {
        let error = DataError::MissingColumn("Jurisdiction".to_string());
        assert_eq!(error.to_string(), "Missing column 'Jurisdiction'");
    }

    #[test]
    fn test_invalid_date_error() {
        let error = DataError::InvalidDate("20201345".to_string());
        assert_eq!(error.to_string(), "Invalid date: 20201345");
    }

    #[test]
    fn test_no_data_error() {
        assert_eq!(DataError::NoData.to_string(), "No data returned");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "latest_covid_data.csv");
        let error: DataError = io.into();
        assert!(matches!(error, DataError::Io(_)));
        assert!(error.to_string().contains("latest_covid_data.csv"));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(DataError::RequestFailed("test".to_string()));
        assert_eq!(error.to_string(), "Request failed: test");
    }
}
