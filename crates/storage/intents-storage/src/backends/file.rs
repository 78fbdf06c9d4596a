//! Simple file-based storage backend

use crate::config::FileConfig;
use crate::{error::Result, traits::Storage, StorageError};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;

/// File-backed storage using a single JSON object of hex-encoded pairs.
///
/// The whole map is kept in memory and the file is rewritten after every
/// mutation. Writes go to a sibling temp file that is then renamed into
/// place.
#[derive(Clone)]
pub struct FileStorage {
    path: PathBuf,
    cache: Arc<RwLock<HashMap<Vec<u8>, Vec<u8>>>>,
    write_lock: Arc<Mutex<()>>,
}

impl FileStorage {
    /// Open (or create) file storage at `path`
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut cache = HashMap::new();
        if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            if !data.trim().is_empty() {
                let map: HashMap<String, String> = serde_json::from_str(&data)
                    .map_err(|e| StorageError::Deserialization(e.to_string()))?;

                for (k, v) in map {
                    let key = hex::decode(&k)
                        .map_err(|e| StorageError::Deserialization(format!("key {k}: {e}")))?;
                    let value = hex::decode(&v)
                        .map_err(|e| StorageError::Deserialization(format!("value of {k}: {e}")))?;
                    cache.insert(key, value);
                }
            }
        }

        Ok(Self {
            path,
            cache: Arc::new(RwLock::new(cache)),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Open from configuration
    pub fn from_config(config: &FileConfig) -> Result<Self> {
        Self::new(&config.path)
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the map, persist the copy, then publish it.
    ///
    /// Readers keep seeing the previous state until the file has been
    /// renamed into place; a failed write leaves the cache untouched.
    async fn commit<F>(&self, change: F) -> Result<bool>
    where
        F: FnOnce(&mut HashMap<Vec<u8>, Vec<u8>>) -> bool,
    {
        let _guard = self.write_lock.lock().await;

        let mut next = self.cache.read().clone();
        if !change(&mut next) {
            return Ok(false);
        }

        self.persist(&next).await?;
        *self.cache.write() = next;
        Ok(true)
    }

    async fn persist(&self, map: &HashMap<Vec<u8>, Vec<u8>>) -> Result<()> {
        let encoded: HashMap<String, String> = map
            .iter()
            .map(|(k, v)| (hex::encode(k), hex::encode(v)))
            .collect();
        let json = serde_json::to_string_pretty(&encoded)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    type Error = StorageError;

    async fn get(&self, key: &[u8]) -> Result<Option<Bytes>> {
        let cache = self.cache.read();
        Ok(cache.get(key).map(|v| Bytes::copy_from_slice(v)))
    }

    async fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.commit(|map| {
            map.insert(key.to_vec(), value.to_vec());
            true
        })
        .await?;
        Ok(())
    }

    async fn replace(&self, key: &[u8], value: &[u8]) -> Result<bool> {
        self.commit(|map| match map.get_mut(key) {
            Some(current) => {
                *current = value.to_vec();
                true
            }
            None => false,
        })
        .await
    }

    async fn delete(&self, key: &[u8]) -> Result<()> {
        self.commit(|map| map.remove(key).is_some()).await?;
        Ok(())
    }

    async fn exists(&self, key: &[u8]) -> Result<bool> {
        Ok(self.cache.read().contains_key(key))
    }

    async fn flush(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let snapshot = self.cache.read().clone();
        self.persist(&snapshot).await
    }

    async fn list(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>> {
        let cache = self.cache.read();
        Ok(cache
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
