//! Error types for ordex.

use thiserror::Error;

/// Result type alias using OrdexError.
pub type Result<T> = std::result::Result<T, OrdexError>;

/// Errors that can occur in ordex operations.
///
/// Insertion and lookup on an index never fail. Errors come from the
/// invariant checker, configuration loading and report output.
#[derive(Debug, Error)]
pub enum OrdexError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Index errors
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_conversion() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let err: OrdexError = io_err.into();
        assert!(matches!(err, OrdexError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: OrdexError = json_err.into();
        assert!(matches!(err, OrdexError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn test_invariant_violation_display() {
        let err = OrdexError::InvariantViolation("root is red".to_string());
        assert_eq!(err.to_string(), "Invariant violation: root is red");
    }

    #[test]
    fn test_config_errors_display() {
        let err = OrdexError::ConfigError("no sizes configured".to_string());
        assert_eq!(err.to_string(), "Configuration error: no sizes configured");

        let err = OrdexError::InvalidParameter {
            name: "search_iterations".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter: search_iterations = 0");
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(OrdexError::InvariantViolation("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OrdexError>();
    }
}
