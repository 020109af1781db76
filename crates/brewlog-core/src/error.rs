//! Error types for Brewlog core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Brewlog operations.
pub type Result<T> = std::result::Result<T, BrewLogError>;

/// Core error type for Brewlog operations.
#[derive(Debug, Error)]
pub enum BrewLogError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Document or entry validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Removal position outside the current history
    #[error("Position {index} is out of range (history has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for BrewLogError {
    fn from(err: std::io::Error) -> Self {
        BrewLogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BrewLogError {
    fn from(err: serde_json::Error) -> Self {
        BrewLogError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = BrewLogError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Position 4 is out of range (history has 2 entries)"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BrewLogError = io.into();
        assert!(matches!(err, BrewLogError::Storage(_)));
    }
}
