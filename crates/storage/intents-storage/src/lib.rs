//! Intents Storage - document storage for the intents service
//!
//! A small key/value [`Storage`] abstraction with in-memory and file
//! backends, and the [`IntentRepository`] that keeps intent documents in a
//! collection on top of it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod repository;
pub mod traits;

// Re-export commonly used types
pub use config::{FileConfig, MemoryConfig, StorageConfig};
pub use error::{Result, StorageError};
pub use factory::{SharedStorage, StorageFactory};
pub use repository::{DocumentRepository, IntentRepository, COLLECTION};
pub use traits::Storage;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        config::StorageConfig,
        error::{Result, StorageError},
        repository::{DocumentRepository, IntentRepository},
        traits::Storage,
        StorageFactory,
    };
}
