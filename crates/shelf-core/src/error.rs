//! Error types for Shelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer decides how
//! each one is reported to the user.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Raw input could not be coerced into a field value
    #[error("Validation error: {0}")]
    Validation(String),

    /// Snapshot file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Library could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: ShelfError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ShelfError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: denied");
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: ShelfError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ShelfError::Serialization(_)));
    }
}
