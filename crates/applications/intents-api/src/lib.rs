//! # Intents API
//!
//! Service layer and REST resource for the `intent` collection.
//!
//! Components are composed explicitly at start-up (see [`server::compose`]):
//! storage backend → [`intents_storage::DocumentRepository`] →
//! [`service::DefaultIntentService`] → [`rest::ApiState`] → router. Each one
//! receives its own `tracing::Span` instead of looking up a global logger.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod rest;
pub mod server;
pub mod service;

// Re-export main types
pub use error::{ApiError, ErrorBody};
pub use rest::{create_router, ApiState};
pub use server::{compose, IntentsServer};
pub use service::{DefaultIntentService, IntentService};
