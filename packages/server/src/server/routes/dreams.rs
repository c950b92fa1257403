//! Dream submission and polling endpoints.
//!
//! POST /dreams        - submit a dream, returns 201 with the pending record
//! GET  /dreams/:id    - fetch one dream (clients poll this while pending)
//! GET  /dreams        - list dreams with offset/limit pagination

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    Json,
};
use tracing::error;
use uuid::Uuid;

use crate::common::ListParams;
use crate::domains::dreams::models::{CreateDream, Dream};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Submit a dream for content generation.
///
/// The record is persisted before the response is sent; generation runs in
/// the background and the response never waits for it.
pub async fn create_dream_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<CreateDream>,
) -> Result<(StatusCode, Json<Dream>), ApiError> {
    if input.user_id.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "user_id must not be empty".to_string(),
        ));
    }
    if input.description.trim().is_empty() {
        return Err(ApiError::UnprocessableEntity(
            "description must not be empty".to_string(),
        ));
    }

    let dream = Dream::create(&input, &state.db_pool).await?;

    // The dream is already persisted; if dispatch fails it stays pending
    // instead of failing the request.
    if let Err(e) = state.generation_queue.dispatch(dream.id).await {
        error!(dream_id = %dream.id, error = %e, "failed to enqueue dream for generation");
    }

    Ok((StatusCode::CREATED, Json(dream)))
}

/// Fetch a single dream by id.
pub async fn get_dream_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Dream>, ApiError> {
    let id = id
        .parse::<Uuid>()
        .map_err(|_| ApiError::UnprocessableEntity("invalid dream id".to_string()))?;

    let dream = Dream::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(dream))
}

/// List dreams in submission order.
pub async fn list_dreams_handler(
    Extension(state): Extension<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Dream>>, ApiError> {
    // Malformed query strings become a JSON 422 like every other input error
    let Query(params) = params.map_err(|e| ApiError::UnprocessableEntity(e.body_text()))?;

    let params = params.validate();
    let dreams = Dream::list(&params, &state.db_pool).await?;
    Ok(Json(dreams))
}
