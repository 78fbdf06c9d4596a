//! Configuration structures for storage backends

use crate::error::{Result, StorageError};
use intents_core::{StorageKind, StorageSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main storage configuration enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageConfig {
    /// In-memory storage configuration
    #[cfg(feature = "memory")]
    Memory(MemoryConfig),

    /// Single-file JSON storage configuration
    #[cfg(feature = "file")]
    File(FileConfig),
}

impl StorageConfig {
    /// Translate the application-level storage settings
    pub fn from_settings(settings: &StorageSettings) -> Result<Self> {
        match settings.backend {
            #[cfg(feature = "memory")]
            StorageKind::Memory => Ok(StorageConfig::Memory(MemoryConfig {
                initial_capacity: settings.initial_capacity,
                max_memory_bytes: settings.max_memory_bytes,
            })),
            #[cfg(feature = "file")]
            StorageKind::File => {
                let path = settings.path.clone().ok_or_else(|| {
                    StorageError::Config("file backend requires a path".to_string())
                })?;
                Ok(StorageConfig::File(FileConfig { path }))
            }
            #[allow(unreachable_patterns)]
            other => Err(StorageError::Config(format!(
                "Storage backend {other:?} not enabled in features"
            ))),
        }
    }
}

/// Configuration for in-memory storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Initial capacity for the memory map
    #[serde(default = "default_memory_capacity")]
    pub initial_capacity: usize,

    /// Maximum memory usage in bytes (0 = unlimited)
    #[serde(default)]
    pub max_memory_bytes: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_memory_capacity(),
            max_memory_bytes: 0,
        }
    }
}

/// Configuration for file storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Path to the JSON file; created on first write
    pub path: PathBuf,
}

fn default_memory_capacity() -> usize {
    1024
}
