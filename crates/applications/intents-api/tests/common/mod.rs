//! Shared fixture for the REST tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use intents_api::{create_router, ApiState, DefaultIntentService};
use intents_core::{AppConfig, Intent};
use intents_storage::{backends::MemoryStorage, DocumentRepository, IntentRepository};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use tracing::Span;

pub const DEFAULT_TAG: &str = "AAAAAAAAAA";
pub const UPDATED_TAG: &str = "BBBBBBBBBB";
pub const DEFAULT_CONTEXT_SET: &str = "AAAAAAAAAA";
pub const UPDATED_CONTEXT_SET: &str = "BBBBBBBBBB";
pub const DEFAULT_CONTEXT_FILTER: &str = "AAAAAAAAAA";
pub const UPDATED_CONTEXT_FILTER: &str = "BBBBBBBBBB";

/// Captured response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Router over a fresh in-memory repository
pub struct TestApp {
    pub router: Router,
    pub repository: Arc<DocumentRepository>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let repository = Arc::new(DocumentRepository::new(
            Arc::new(MemoryStorage::default()),
            Span::none(),
        ));
        let service = Arc::new(DefaultIntentService::new(repository.clone(), Span::none()));
        let state = ApiState::new(service, config, Span::none()).expect("valid state");
        Self {
            router: create_router(state, true),
            repository,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    /// Store an entity directly, bypassing the REST layer
    pub async fn insert(&self, intent: Intent) -> Intent {
        self.repository.save(intent).await.expect("insert succeeds")
    }

    pub async fn count(&self) -> u64 {
        self.repository.count().await.expect("count succeeds")
    }
}

/// Entity populated with the default test values
pub fn default_intent() -> Intent {
    Intent::new()
        .tag(DEFAULT_TAG)
        .patterns(vec!["hi".to_string(), "hello".to_string()])
        .responses(vec!["Hello!".to_string()])
        .context_set(DEFAULT_CONTEXT_SET)
        .context_filter(DEFAULT_CONTEXT_FILTER)
}
