//! Core traits shared by the intents crates

use crate::IntentsResult;

/// Trait for validatable objects
pub trait Validatable {
    /// Validate this object
    fn validate(&self) -> IntentsResult<()>;

    /// Check if this object is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
