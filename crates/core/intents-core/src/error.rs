//! Error handling types for the intents service.
//!
//! Every layer converts its own failures into [`IntentsError`] before they
//! reach the HTTP boundary, where they are projected onto status codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the object that failed validation (e.g. `intentDto`)
    pub object_name: String,
    /// Offending field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(
        object_name: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The main error type for the intents service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentsError {
    /// Input rejected before or during persistence
    #[error("Validation error ({code}): {message}")]
    Validation {
        /// Machine-readable alert code, e.g. `idexists`
        code: String,
        /// Human-readable message
        message: String,
        /// Per-field failures, empty when the error is not field-specific
        field_errors: Vec<FieldError>,
    },

    /// Lookup by id yielded nothing
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Storage backend unreachable or rejected the operation
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IntentsError {
    /// Create a validation error without field details
    pub fn validation<C: fmt::Display, M: fmt::Display>(code: C, message: M) -> Self {
        Self::Validation {
            code: code.to_string(),
            message: message.to_string(),
            field_errors: Vec::new(),
        }
    }

    /// Create a validation error from field failures
    pub fn invalid_fields(field_errors: Vec<FieldError>) -> Self {
        let message = field_errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join(", ");
        Self::Validation {
            code: "validation".to_string(),
            message,
            field_errors,
        }
    }

    /// A new entity cannot already carry an id
    pub fn id_exists(entity: &str) -> Self {
        Self::validation("idexists", format!("A new {entity} cannot already have an ID"))
    }

    /// Create a new not found error
    pub fn not_found<T: fmt::Display>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// Create a new persistence error
    pub fn persistence<T: fmt::Display>(msg: T) -> Self {
        Self::Persistence(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Self::Configuration(msg.to_string())
    }

    /// Create a new serialization error
    pub fn serialization<T: fmt::Display>(msg: T) -> Self {
        Self::Serialization(msg.to_string())
    }

    /// Check if this error is a client error (4xx-style)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound(_))
    }

    /// Check if this error is a server error (5xx-style)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }
}

impl From<serde_json::Error> for IntentsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for intents operations
pub type IntentsResult<T> = Result<T, IntentsError>;
