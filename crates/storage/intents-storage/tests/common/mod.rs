//! Common test utilities and fixtures for intents-storage

use intents_core::Intent;
use intents_storage::{
    config::{FileConfig, MemoryConfig},
    DocumentRepository, Result, StorageConfig, StorageFactory,
};
use std::sync::Arc;
use tempfile::TempDir;
use tracing::Span;

/// Test fixture for creating temporary repositories
pub struct RepositoryFixture {
    _temp_dir: Option<Arc<TempDir>>,
    pub repository: DocumentRepository,
}

impl RepositoryFixture {
    /// Repository over a fresh in-memory backend
    pub fn new_memory() -> Result<Self> {
        let storage = StorageFactory::from_config(&StorageConfig::Memory(MemoryConfig::default()))?;
        Ok(Self {
            _temp_dir: None,
            repository: DocumentRepository::new(storage, Span::none()),
        })
    }

    /// Repository over a file backend in a temporary directory
    pub fn new_file() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let storage = StorageFactory::from_config(&StorageConfig::File(FileConfig {
            path: temp_dir.path().join("intents.json"),
        }))?;
        Ok(Self {
            _temp_dir: Some(Arc::new(temp_dir)),
            repository: DocumentRepository::new(storage, Span::none()),
        })
    }

    /// Handle that keeps the temporary directory alive independently of the
    /// fixture (test closures may capture only `fixture.repository`)
    #[allow(dead_code)]
    pub fn temp_dir_guard(&self) -> Option<Arc<TempDir>> {
        self._temp_dir.clone()
    }
}

/// An unsaved intent with the given tag
pub fn intent(tag: &str) -> Intent {
    Intent::new()
        .tag(tag)
        .patterns(vec![format!("{tag} pattern")])
        .responses(vec![format!("{tag} response")])
}

/// Macro for running one test body against every backend.
///
/// Expects `#[macro_use] mod common;` in the test crate.
macro_rules! test_all_backends {
    ($test_name:ident, $test_fn:expr) => {
        mod $test_name {
            use super::*;
            use pretty_assertions::assert_eq;

            #[tokio::test]
            async fn memory() {
                let fixture = crate::common::RepositoryFixture::new_memory()
                    .expect("Failed to create memory repository");
                let test_fn = $test_fn;
                test_fn(fixture).await;
            }

            #[tokio::test]
            async fn file() {
                let fixture = crate::common::RepositoryFixture::new_file()
                    .expect("Failed to create file repository");
                let _temp_dir_guard = fixture.temp_dir_guard();
                let test_fn = $test_fn;
                test_fn(fixture).await;
            }
        }
    };
}
