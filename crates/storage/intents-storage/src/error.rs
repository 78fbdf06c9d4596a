//! Error types for the storage module

use intents_core::IntentsError;
use thiserror::Error;

/// Type alias for Results using StorageError
pub type Result<T> = std::result::Result<T, StorageError>;

/// Main error type for storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage is full
    #[error("Storage is full")]
    StorageFull,

    /// Key not found
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid key format or query property
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Document rejected by the collection
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

impl StorageError {
    /// Check if the error indicates data not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }

    /// Check if the error is due to storage being full
    pub fn is_storage_full(&self) -> bool {
        matches!(self, StorageError::StorageFull)
    }
}

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        StorageError::Other(s)
    }
}

impl From<&str> for StorageError {
    fn from(s: &str) -> Self {
        StorageError::Other(s.to_string())
    }
}

// Map StorageError to IntentsError
impl From<StorageError> for IntentsError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(msg) => IntentsError::NotFound(msg),
            StorageError::InvalidKey(msg) => IntentsError::validation("badquery", msg),
            StorageError::InvalidValue(msg) => IntentsError::validation("validation", msg),
            StorageError::Config(msg) => IntentsError::Configuration(msg),
            other => IntentsError::Persistence(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: IntentsError = StorageError::NotFound("intent:42".into()).into();
        assert_eq!(err, IntentsError::NotFound("intent:42".into()));
    }

    #[test]
    fn test_invalid_key_maps_to_validation() {
        let err: IntentsError = StorageError::InvalidKey("patterns".into()).into();
        assert!(matches!(err, IntentsError::Validation { ref code, .. } if code == "badquery"));
    }

    #[test]
    fn test_backend_failures_map_to_persistence() {
        let err: IntentsError = StorageError::StorageFull.into();
        assert!(matches!(err, IntentsError::Persistence(_)));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: IntentsError = StorageError::from(io).into();
        assert!(err.is_server_error());
    }
}
