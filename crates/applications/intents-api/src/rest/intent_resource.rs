//! REST controller for managing intents

use super::{generate_pagination_headers, page_request, ApiState, Timed, INTENTS_PATH};
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    http::{header::LOCATION, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use intents_core::{IntentDto, IntentsError, Validatable, ENTITY_NAME};
use tracing::debug;

type ApiResult = Result<Response, ApiError>;

impl ApiState {
    fn fail(&self, error: IntentsError) -> ApiError {
        ApiError::from_error(error, &self.headers, ENTITY_NAME)
    }

    fn rejected(&self, rejection: JsonRejection) -> ApiError {
        ApiError::bad_request(
            &self.headers,
            ENTITY_NAME,
            "badrequest",
            rejection.body_text(),
            Vec::new(),
        )
    }
}

/// POST /api/intents : Create a new intent.
///
/// 201 with the stored intent and a `Location` header, or 400 when the body
/// already carries an id or fails validation.
pub(super) async fn create_intent(
    State(state): State<ApiState>,
    body: Result<Json<IntentDto>, JsonRejection>,
) -> ApiResult {
    let _timed = Timed::new("create");
    let Json(dto) = body.map_err(|r| state.rejected(r))?;
    debug!(parent: &state.span, "REST request to save Intent : {}", dto);
    create(&state, dto).await
}

async fn create(state: &ApiState, dto: IntentDto) -> ApiResult {
    dto.validate().map_err(|e| state.fail(e))?;
    if dto.id.is_some() {
        return Err(state.fail(IntentsError::id_exists(ENTITY_NAME)));
    }

    let result = state.service.save(dto).await.map_err(|e| state.fail(e))?;
    let id = result
        .id
        .clone()
        .ok_or_else(|| state.fail(IntentsError::persistence("stored intent has no id")))?;

    let mut headers = state.headers.entity_creation_alert(ENTITY_NAME, &id);
    if let Ok(location) = HeaderValue::from_str(&format!("{INTENTS_PATH}/{id}")) {
        headers.insert(LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(result)).into_response())
}

/// PUT /api/intents : Update an existing intent.
///
/// A body without id is treated as a create. An id that is not stored
/// answers 404.
pub(super) async fn update_intent(
    State(state): State<ApiState>,
    body: Result<Json<IntentDto>, JsonRejection>,
) -> ApiResult {
    let _timed = Timed::new("update");
    let Json(dto) = body.map_err(|r| state.rejected(r))?;
    debug!(parent: &state.span, "REST request to update Intent : {}", dto);

    if dto.id.is_none() {
        return create(&state, dto).await;
    }
    dto.validate().map_err(|e| state.fail(e))?;

    let result = state.service.save(dto).await.map_err(|e| state.fail(e))?;
    let id = result.id.clone().unwrap_or_default();
    let headers = state.headers.entity_update_alert(ENTITY_NAME, &id);
    Ok((StatusCode::OK, headers, Json(result)).into_response())
}

/// GET /api/intents : One page of intents with paging headers
pub(super) async fn get_all_intents(
    State(state): State<ApiState>,
    RawQuery(query): RawQuery,
) -> ApiResult {
    let _timed = Timed::new("list");
    debug!(parent: &state.span, "REST request to get a page of Intents");

    let request = page_request(query.as_deref(), &state.pagination).map_err(|e| state.fail(e))?;
    let page = state
        .service
        .find_all(&request)
        .await
        .map_err(|e| state.fail(e))?;

    let headers = generate_pagination_headers(&page, INTENTS_PATH);
    Ok((StatusCode::OK, headers, Json(page.content)).into_response())
}

/// GET /api/intents/:id
pub(super) async fn get_intent(State(state): State<ApiState>, Path(id): Path<String>) -> ApiResult {
    let _timed = Timed::new("get");
    debug!(parent: &state.span, "REST request to get Intent : {}", id);

    match state.service.find_one(&id).await.map_err(|e| state.fail(e))? {
        Some(dto) => Ok(Json(dto).into_response()),
        None => Err(ApiError::NotFound),
    }
}

/// DELETE /api/intents/:id : Succeeds whether or not the id exists
pub(super) async fn delete_intent(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult {
    let _timed = Timed::new("delete");
    debug!(parent: &state.span, "REST request to delete Intent : {}", id);

    state.service.delete(&id).await.map_err(|e| state.fail(e))?;
    let headers = state.headers.entity_deletion_alert(ENTITY_NAME, &id);
    Ok((StatusCode::OK, headers).into_response())
}

/// GET /api/intents/by-tag/:tag : First intent carrying the tag
pub(super) async fn get_intent_by_tag(
    State(state): State<ApiState>,
    Path(tag): Path<String>,
) -> ApiResult {
    let _timed = Timed::new("get_by_tag");
    debug!(parent: &state.span, "REST request to get Intent by tag : {}", tag);

    match state.service.find_by_tag(&tag).await.map_err(|e| state.fail(e))? {
        Some(dto) => Ok(Json(dto).into_response()),
        None => Err(ApiError::NotFound),
    }
}

/// DELETE /api/intents/by-tag/:tag
pub(super) async fn delete_intents_by_tag(
    State(state): State<ApiState>,
    Path(tag): Path<String>,
) -> ApiResult {
    let _timed = Timed::new("delete_by_tag");
    debug!(parent: &state.span, "REST request to delete Intents by tag : {}", tag);

    state
        .service
        .delete_by_tag(&tag)
        .await
        .map_err(|e| state.fail(e))?;
    let headers = state.headers.entity_deletion_alert(ENTITY_NAME, &tag);
    Ok((StatusCode::OK, headers).into_response())
}
