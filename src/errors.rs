//! Error handling utilities for the dayport converter.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents all possible errors that can occur in the dayport converter.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while walking the source entries directory.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Failure while tokenizing a source XML document.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Failure while encoding the output document.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results with an [`AppError`] error type.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Empty source directory".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Empty source directory"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");
    }

    #[test]
    fn test_app_error_from_json_error() {
        // Force a serde_json error by deserializing invalid input
        let bad: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let app_error: AppError = bad.unwrap_err().into();

        assert!(format!("{}", app_error).starts_with("JSON encoding error:"));
    }
}
