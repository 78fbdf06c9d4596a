//! Tracing subscriber bootstrap.
//!
//! Components never reach for a global logger: each one is handed a
//! [`tracing::Span`] at construction and emits its events under it. This
//! module only installs the subscriber that those spans report to.

use crate::{config::LoggingConfig, error::IntentsError, IntentsResult};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
pub fn init_tracing(config: &LoggingConfig) -> IntentsResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| IntentsError::config(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| IntentsError::config(format!("Failed to install subscriber: {e}")))
}

/// Span handed to a component at construction
#[must_use]
pub fn component_span(component: &'static str) -> tracing::Span {
    tracing::info_span!("component", name = component)
}

/// Initialize test logging, ignoring repeated calls
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
