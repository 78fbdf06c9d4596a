//! Server wiring: component composition and the HTTP listener

use crate::{
    rest::{create_router, ApiState},
    service::DefaultIntentService,
};
use axum::Router;
use intents_core::{telemetry::component_span, AppConfig, IntentsError, IntentsResult, ServerConfig};
use intents_storage::{DocumentRepository, StorageConfig, StorageFactory};
use std::net::SocketAddr;
use std::sync::Arc;

/// Build the handler state from configuration.
///
/// storage backend → repository → service → REST state, each with its own span.
pub fn compose(config: &AppConfig) -> IntentsResult<ApiState> {
    let storage_config = StorageConfig::from_settings(&config.storage)?;
    let storage = StorageFactory::from_config(&storage_config)?;

    let repository = Arc::new(DocumentRepository::new(storage, component_span("repository")));
    let service = Arc::new(DefaultIntentService::new(repository, component_span("service")));

    ApiState::new(service, config, component_span("intent-resource"))
}

/// Main intents server
pub struct IntentsServer {
    config: ServerConfig,
    router: Router,
}

impl IntentsServer {
    /// Compose every component and build the router
    pub fn new(config: &AppConfig) -> IntentsResult<Self> {
        let state = compose(config)?;
        let router = create_router(state, config.server.enable_cors);
        Ok(Self {
            config: config.server.clone(),
            router,
        })
    }

    /// Address the server will listen on
    pub fn addr(&self) -> IntentsResult<SocketAddr> {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e| IntentsError::config(format!("Invalid address: {e}")))
    }

    /// The composed router, for in-process callers
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Start the server; returns after Ctrl+C
    pub async fn start(self) -> IntentsResult<()> {
        let addr = self.addr()?;
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| IntentsError::config(format!("Cannot bind {addr}: {e}")))?;

        tracing::info!("Starting intents server on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| IntentsError::persistence(format!("Server error: {e}")))?;

        tracing::info!("Intents server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
