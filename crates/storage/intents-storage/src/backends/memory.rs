//! In-memory storage backend for testing and development

use crate::config::MemoryConfig;
use crate::error::{Result, StorageError};
use crate::traits::Storage;
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct MemoryState {
    data: HashMap<Vec<u8>, Vec<u8>>,
    size_bytes: usize,
}

/// In-memory storage implementation
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    state: Arc<RwLock<MemoryState>>,
    config: MemoryConfig,
}

impl MemoryStorage {
    /// Create a new memory storage instance with config
    pub fn new(config: MemoryConfig) -> Self {
        let capacity = if config.initial_capacity > 0 {
            config.initial_capacity
        } else {
            1024
        };

        Self {
            state: Arc::new(RwLock::new(MemoryState {
                data: HashMap::with_capacity(capacity),
                size_bytes: 0,
            })),
            config,
        }
    }

    /// Create with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(MemoryConfig {
            initial_capacity: capacity,
            max_memory_bytes: 0,
        })
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.state.read().data.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    type Error = StorageError;

    async fn get(&self, key: &[u8]) -> Result<Option<Bytes>> {
        let state = self.state.read();
        Ok(state.data.get(key).map(|v| Bytes::copy_from_slice(v)))
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        let mut state = self.state.write();

        let old_entry_size = state.data.get(key).map_or(0, |v| key.len() + v.len());
        let projected_size = state.size_bytes - old_entry_size + key.len() + value.len();

        // Check memory limits if configured
        if self.config.max_memory_bytes > 0 && projected_size > self.config.max_memory_bytes {
            return Err(StorageError::StorageFull);
        }

        state.data.insert(key.to_vec(), value.to_vec());
        state.size_bytes = projected_size;
        Ok(())
    }

    async fn replace(&self, key: &[u8], value: &[u8]) -> Result<bool> {
        let mut state = self.state.write();

        let Some(old_len) = state.data.get(key).map(Vec::len) else {
            return Ok(false);
        };
        let projected_size = state.size_bytes - old_len + value.len();
        if self.config.max_memory_bytes > 0 && projected_size > self.config.max_memory_bytes {
            return Err(StorageError::StorageFull);
        }

        state.data.insert(key.to_vec(), value.to_vec());
        state.size_bytes = projected_size;
        Ok(true)
    }

    async fn delete(&self, key: &[u8]) -> Result<()> {
        let mut state = self.state.write();
        if let Some(old) = state.data.remove(key) {
            state.size_bytes -= key.len() + old.len();
        }
        Ok(())
    }

    async fn exists(&self, key: &[u8]) -> Result<bool> {
        Ok(self.state.read().data.contains_key(key))
    }

    async fn list(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>> {
        let state = self.state.read();
        Ok(state
            .data
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_storage_is_empty() {
        let storage = MemoryStorage::default();
        assert!(storage.get(b"key").await.unwrap().is_none());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_put_and_get() {
        let storage = MemoryStorage::default();
        storage.put(b"key", b"value").await.unwrap();

        let result = storage.get(b"key").await.unwrap();
        assert_eq!(result, Some(Bytes::from("value")));
    }

    #[tokio::test]
    async fn test_delete() {
        let storage = MemoryStorage::default();
        storage.put(b"key", b"value").await.unwrap();
        assert!(storage.exists(b"key").await.unwrap());

        storage.delete(b"key").await.unwrap();
        assert!(!storage.exists(b"key").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_non_existent_key() {
        let storage = MemoryStorage::default();
        storage.delete(b"non-existent").await.unwrap();
    }

    #[tokio::test]
    async fn test_replace_only_existing() {
        let storage = MemoryStorage::default();
        assert!(!storage.replace(b"key", b"value").await.unwrap());
        assert!(storage.is_empty());

        storage.put(b"key", b"value").await.unwrap();
        assert!(storage.replace(b"key", b"other").await.unwrap());
        assert_eq!(storage.get(b"key").await.unwrap(), Some(Bytes::from("other")));
    }

    #[tokio::test]
    async fn test_list_by_prefix() {
        let storage = MemoryStorage::default();
        storage.put(b"intent:1", b"a").await.unwrap();
        storage.put(b"intent:2", b"b").await.unwrap();
        storage.put(b"other:1", b"c").await.unwrap();

        let mut keys = storage.list(b"intent:").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec![b"intent:1".to_vec(), b"intent:2".to_vec()]);
    }

    #[tokio::test]
    async fn test_memory_limit() {
        let storage = MemoryStorage::new(MemoryConfig {
            initial_capacity: 16,
            max_memory_bytes: 16,
        });
        storage.put(b"k1", b"12345678").await.unwrap();

        let err = storage.put(b"k2", b"12345678").await.unwrap_err();
        assert!(err.is_storage_full());

        // Replacing an entry only counts the difference
        storage.put(b"k1", b"1234567890").await.unwrap();
        storage.delete(b"k1").await.unwrap();
        storage.put(b"k2", b"12345678").await.unwrap();
    }

    #[tokio::test]
    async fn test_clone_shares_data() {
        let storage1 = MemoryStorage::default();
        storage1.put(b"key", b"value").await.unwrap();

        let storage2 = storage1.clone();
        storage2.put(b"key2", b"value2").await.unwrap();
        assert_eq!(storage1.get(b"key2").await.unwrap(), Some(Bytes::from("value2")));
        assert_eq!(storage1.len(), 2);
    }
}
