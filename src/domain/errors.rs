//! Domain error types
//!
//! This module defines the error hierarchy for the reporting job.
//! Errors never expose third-party types: adapters map driver, CSV and
//! TOML failures into the variants below at the boundary.

use thiserror::Error;

/// Main error type for the reporting job
///
/// Every variant is fatal for the run. Row-level data-quality problems are
/// not errors; they are counted as rejections by the cleaning step.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration-related errors (incomplete credentials, invalid values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Store unreachable, authentication rejected or server selection timeout
    #[error("Connection error: {0}")]
    Connection(String),

    /// The source collection returned no documents
    #[error("Data availability error: {0}")]
    DataAvailability(String),

    /// Query failed after the connection was established
    #[error("Query error: {0}")]
    Query(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ReportError {
    /// Process exit code associated with this error
    ///
    /// | Code | Meaning |
    /// |------|---------|
    /// | 2 | configuration |
    /// | 3 | data availability |
    /// | 4 | connection |
    /// | 5 | any other fatal error |
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::Configuration(_) => 2,
            ReportError::DataAvailability(_) => 3,
            ReportError::Connection(_) => 4,
            ReportError::Query(_) | ReportError::Csv(_) | ReportError::Io(_) => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ReportError {
    fn from(err: toml::de::Error) -> Self {
        ReportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_display() {
        let err = ReportError::Configuration("MONGO_PASS is missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: MONGO_PASS is missing");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ReportError::Configuration(String::new()).exit_code(), 2);
        assert_eq!(ReportError::DataAvailability(String::new()).exit_code(), 3);
        assert_eq!(ReportError::Connection(String::new()).exit_code(), 4);
        assert_eq!(ReportError::Query(String::new()).exit_code(), 5);
        assert_eq!(ReportError::Io(String::new()).exit_code(), 5);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ReportError = io_err.into();
        assert!(matches!(err, ReportError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ReportError = toml_err.into();
        assert!(matches!(err, ReportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_report_error_implements_std_error() {
        let err = ReportError::Query("cursor closed".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
