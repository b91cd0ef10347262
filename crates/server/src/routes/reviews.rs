use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::review::{self, NewReview, ReviewChanges};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/review", tag = "review", responses((status = 200, body = [crate::openapi::ReviewDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<review::Model>>, JsonApiError> {
    Ok(Json(state.services.reviews.list().await?))
}

#[utoipa::path(
    get, path = "/review/{id}", tag = "review",
    params(("id" = i64, Path, description = "Review id")),
    responses((status = 200, body = crate::openapi::ReviewDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<review::Model>, JsonApiError> {
    Ok(Json(state.services.reviews.get(id).await?))
}

/// Rating must be between 1 and 5.
#[utoipa::path(
    post, path = "/review", tag = "review",
    request_body = crate::openapi::ReviewInputDoc,
    responses((status = 200, body = crate::openapi::ReviewDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(draft): ApiJson<NewReview>,
) -> Result<Json<review::Model>, JsonApiError> {
    Ok(Json(state.services.reviews.create(draft).await?))
}

#[utoipa::path(
    put, path = "/review/{id}", tag = "review",
    params(("id" = i64, Path, description = "Review id")),
    request_body = crate::openapi::ReviewInputDoc,
    responses(
        (status = 200, body = crate::openapi::ReviewDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(changes): ApiJson<ReviewChanges>,
) -> Result<Json<review::Model>, JsonApiError> {
    Ok(Json(state.services.reviews.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/review/{id}", tag = "review",
    params(("id" = i64, Path, description = "Review id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
