//! Process configuration.
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file, then `INTENTS_*` environment variables.

use crate::{error::IntentsError, IntentsResult, traits::Validatable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "INTENTS_";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Application name used in alert headers (`X-{name}-alert`)
    pub application_name: ApplicationName,
    /// HTTP listener
    pub server: ServerConfig,
    /// Document store backend
    pub storage: StorageSettings,
    /// Paging defaults and limits
    pub pagination: PaginationConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// Application name wrapper so it gets a non-empty default
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ApplicationName(pub String);

impl Default for ApplicationName {
    fn default() -> Self {
        Self("intentsApp".to_string())
    }
}

impl AsRef<str> for ApplicationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Attach a permissive CORS layer
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Which storage backend to open
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Volatile in-process map
    #[default]
    Memory,
    /// Single JSON file on disk
    File,
}

/// Storage backend settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    /// Backend kind
    pub backend: StorageKind,
    /// File path, required by the file backend
    pub path: Option<PathBuf>,
    /// Initial capacity of the memory backend
    pub initial_capacity: usize,
    /// Memory limit of the memory backend (0 = unlimited)
    pub max_memory_bytes: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageKind::Memory,
            path: None,
            initial_capacity: 1024,
            max_memory_bytes: 0,
        }
    }
}

/// Paging defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationConfig {
    /// Size used when the request has no `size`
    pub default_page_size: u32,
    /// Larger requested sizes are clamped to this
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 2000,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info,intents_api=debug,intents_storage=debug".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the TOML file at `path` if given, then the process environment
    pub fn load(path: Option<&Path>) -> IntentsResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.apply_overrides(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file
    pub fn from_file(path: &Path) -> IntentsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            IntentsError::config(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> IntentsResult<Self> {
        toml::from_str(content)
            .map_err(|e| IntentsError::config(format!("Failed to parse TOML: {e}")))
    }

    /// Apply `INTENTS_*` overrides from `vars`
    pub fn apply_overrides<I>(mut self, vars: I) -> IntentsResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "APP_NAME" => self.application_name = ApplicationName(value),
                "HOST" => self.server.host = value,
                "PORT" => {
                    self.server.port = value
                        .parse()
                        .map_err(|e| IntentsError::config(format!("Invalid {key}: {e}")))?;
                }
                "STORAGE_BACKEND" => {
                    self.storage.backend = match value.to_ascii_lowercase().as_str() {
                        "memory" => StorageKind::Memory,
                        "file" => StorageKind::File,
                        other => {
                            return Err(IntentsError::config(format!(
                                "Unknown storage backend: {other}"
                            )))
                        }
                    };
                }
                "STORAGE_PATH" => {
                    self.storage.path = Some(PathBuf::from(value));
                    self.storage.backend = StorageKind::File;
                }
                "LOG_LEVEL" => self.logging.level = value,
                "LOG_JSON" => {
                    self.logging.json = matches!(value.as_str(), "1" | "true" | "yes");
                }
                _ => {}
            }
        }
        Ok(self)
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> IntentsResult<()> {
        if self.application_name.0.trim().is_empty() {
            return Err(IntentsError::config("application_name must not be empty"));
        }
        if self.server.port == 0 {
            return Err(IntentsError::config("server.port must be non-zero"));
        }
        if self.pagination.default_page_size == 0 || self.pagination.max_page_size == 0 {
            return Err(IntentsError::config("page sizes must be at least one"));
        }
        if self.pagination.default_page_size > self.pagination.max_page_size {
            return Err(IntentsError::config(
                "pagination.default_page_size exceeds pagination.max_page_size",
            ));
        }
        if self.storage.backend == StorageKind::File && self.storage.path.is_none() {
            return Err(IntentsError::config("storage.path is required for the file backend"));
        }
        Ok(())
    }
}
