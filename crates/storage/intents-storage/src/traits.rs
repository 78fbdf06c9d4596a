//! Core storage trait that defines the storage abstraction layer

use async_trait::async_trait;
use bytes::Bytes;
use std::error::Error;

/// Key/value storage that all backends must implement
#[async_trait]
pub trait Storage: Send + Sync {
    /// Error type for storage operations
    type Error: Error + Send + Sync + 'static;

    /// Get a value by key
    async fn get(&self, key: &[u8]) -> Result<Option<Bytes>, Self::Error>;

    /// Store a key-value pair, replacing any previous value
    async fn put(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error>;

    /// Overwrite the value of an existing key in one step.
    ///
    /// Returns `false` and writes nothing when the key is absent, so a
    /// concurrent delete is never undone.
    async fn replace(&self, key: &[u8], value: &[u8]) -> Result<bool, Self::Error>;

    /// Delete a key. Deleting a missing key is not an error.
    async fn delete(&self, key: &[u8]) -> Result<(), Self::Error>;

    /// Check if a key exists
    async fn exists(&self, key: &[u8]) -> Result<bool, Self::Error> {
        Ok(self.get(key).await?.is_some())
    }

    /// Flush any pending writes
    async fn flush(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// List every key starting with `prefix`
    async fn list(&self, prefix: &[u8]) -> Result<Vec<Vec<u8>>, Self::Error>;
}
