//! Factory for creating storage backends

use crate::{
    config::StorageConfig,
    error::{Result, StorageError},
    traits::Storage,
};
use std::sync::Arc;

/// Shared handle to any backend
pub type SharedStorage = Arc<dyn Storage<Error = StorageError>>;

/// Factory for creating storage backends
pub struct StorageFactory;

impl StorageFactory {
    /// Create storage from a configuration enum
    pub fn from_config(config: &StorageConfig) -> Result<SharedStorage> {
        match config {
            #[cfg(feature = "memory")]
            StorageConfig::Memory(cfg) => {
                tracing::info!(initial_capacity = cfg.initial_capacity, "Opening memory storage");
                Ok(Arc::new(crate::backends::MemoryStorage::new(cfg.clone())))
            }
            #[cfg(feature = "file")]
            StorageConfig::File(cfg) => {
                tracing::info!(path = %cfg.path.display(), "Opening file storage");
                Ok(Arc::new(crate::backends::FileStorage::from_config(cfg)?))
            }
            #[allow(unreachable_patterns)]
            _ => Err(StorageError::Config(
                "Storage backend not enabled in features".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileConfig, MemoryConfig};

    #[tokio::test]
    async fn test_factory_create_memory() {
        let storage = StorageFactory::from_config(&StorageConfig::Memory(MemoryConfig::default()))
            .unwrap();

        storage.put(b"key", b"value").await.unwrap();
        let value = storage.get(b"key").await.unwrap();
        assert_eq!(value, Some(bytes::Bytes::from("value")));
    }

    #[tokio::test]
    async fn test_factory_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageFactory::from_config(&StorageConfig::File(FileConfig {
            path: dir.path().join("intents.json"),
        }))
        .unwrap();

        storage.put(b"test", b"data").await.unwrap();
        assert!(storage.exists(b"test").await.unwrap());
        assert!(dir.path().join("intents.json").exists());
    }
}
