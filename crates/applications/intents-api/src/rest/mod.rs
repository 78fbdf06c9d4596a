//! REST surface: router, shared state and the intent resource

mod header_util;
mod intent_resource;
mod pagination_util;
mod params;
mod timed;

pub use header_util::HeaderUtil;
pub use pagination_util::{generate_pagination_headers, X_TOTAL_COUNT};
pub use params::page_request;
pub use timed::{Timed, REQUEST_HISTOGRAM};

use crate::service::IntentService;
use axum::{routing::get, Json, Router};
use intents_core::{AppConfig, IntentsError, IntentsResult, PaginationConfig};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;

/// Base path of the intent collection
pub const INTENTS_PATH: &str = "/api/intents";

/// State shared across handlers
#[derive(Clone)]
pub struct ApiState {
    /// Business operations on intents
    pub service: Arc<dyn IntentService>,
    /// Alert header builder for the configured application name
    pub headers: HeaderUtil,
    /// Paging defaults and limits
    pub pagination: PaginationConfig,
    /// Parent span of the resource's log events
    pub span: Span,
}

impl ApiState {
    /// Fails when the application name cannot be used in header names
    pub fn new(
        service: Arc<dyn IntentService>,
        config: &AppConfig,
        span: Span,
    ) -> IntentsResult<Self> {
        let name = &config.application_name.0;
        let headers = HeaderUtil::new(name.as_str()).map_err(|e| {
            IntentsError::config(format!("application name '{name}' is not usable in headers: {e}"))
        })?;
        Ok(Self {
            service,
            headers,
            pagination: config.pagination.clone(),
            span,
        })
    }
}

/// Create the API router
pub fn create_router(state: ApiState, enable_cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            INTENTS_PATH,
            get(intent_resource::get_all_intents)
                .post(intent_resource::create_intent)
                .put(intent_resource::update_intent),
        )
        .route(
            "/api/intents/by-tag/:tag",
            get(intent_resource::get_intent_by_tag).delete(intent_resource::delete_intents_by_tag),
        )
        .route(
            "/api/intents/:id",
            get(intent_resource::get_intent).delete(intent_resource::delete_intent),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "intents-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
