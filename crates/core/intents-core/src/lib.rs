//! # Intents Core
//!
//! Shared building blocks for the intents service: the persisted `Intent`
//! entity, its wire-shape `IntentDto`, the mapper between the two, paging
//! types, the error taxonomy and process configuration.
//!
//! ## Quick Start
//!
//! ```rust
//! use intents_core::{EntityMapper, Intent, IntentMapper};
//!
//! let intent = Intent::new().tag("greeting").patterns(vec!["hello".to_string()]);
//! let dto = IntentMapper.to_dto(intent);
//! assert_eq!(dto.tag.as_deref(), Some("greeting"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod mapper;
pub mod page;
pub mod telemetry;
pub mod traits;

// Re-export commonly used items
pub use config::{
    AppConfig, ApplicationName, LoggingConfig, PaginationConfig, ServerConfig, StorageKind,
    StorageSettings,
};
pub use domain::Intent;
pub use dto::IntentDto;
pub use error::{FieldError, IntentsError, IntentsResult};
pub use mapper::{EntityMapper, IntentMapper};
pub use page::{Direction, Page, PageRequest, SortOrder};
pub use traits::Validatable;

/// Name of the single managed entity, used in alert headers and error bodies
pub const ENTITY_NAME: &str = "intent";

/// Version information for the intents core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(ENTITY_NAME, "intent");
    }
}
