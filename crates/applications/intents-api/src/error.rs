//! HTTP error mapping

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use intents_core::{FieldError, IntentsError};
use serde::Serialize;

use crate::rest::HeaderUtil;

/// JSON body of a 4xx/5xx response
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Message key, `error.{code}`
    pub message: String,
    /// Human-readable detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-field failures
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

/// Failure of a REST request, already classified by status
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 with failure alert headers and an error body
    #[error("bad request: {}", body.message)]
    BadRequest {
        /// Failure alert headers
        headers: HeaderMap,
        /// JSON body
        body: ErrorBody,
    },

    /// 404 with an empty body
    #[error("not found")]
    NotFound,

    /// 500; the detail is logged, never returned
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Classify a domain error; validation failures get `X-{app}-error` alerts
    pub fn from_error(error: IntentsError, headers: &HeaderUtil, entity: &str) -> Self {
        match error {
            IntentsError::Validation {
                code,
                message,
                field_errors,
            } => Self::bad_request(headers, entity, &code, message, field_errors),
            IntentsError::NotFound(_) => Self::NotFound,
            other => Self::Internal(other.to_string()),
        }
    }

    /// 400 carrying `error.{code}`
    pub fn bad_request(
        headers: &HeaderUtil,
        entity: &str,
        code: &str,
        description: impl Into<String>,
        field_errors: Vec<FieldError>,
    ) -> Self {
        Self::BadRequest {
            headers: headers.failure_alert(entity, code),
            body: ErrorBody {
                message: format!("error.{code}"),
                description: Some(description.into()),
                field_errors,
            },
        }
    }

    /// Status this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { headers, body } => {
                (StatusCode::BAD_REQUEST, headers, Json(body)).into_response()
            }
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                let body = ErrorBody {
                    message: "error.internal".to_string(),
                    description: None,
                    field_errors: Vec::new(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
