use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::category::{self, NewCategory, CategoryChanges};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/category", tag = "category", responses((status = 200, body = [crate::openapi::CategoryDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<category::Model>>, JsonApiError> {
    Ok(Json(state.services.categories.list().await?))
}

#[utoipa::path(
    get, path = "/category/{id}", tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses((status = 200, body = crate::openapi::CategoryDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(state.services.categories.get(id).await?))
}

#[utoipa::path(
    post, path = "/category", tag = "category",
    request_body = crate::openapi::CategoryInputDoc,
    responses((status = 200, body = crate::openapi::CategoryDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(draft): ApiJson<NewCategory>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(state.services.categories.create(draft).await?))
}

#[utoipa::path(
    put, path = "/category/{id}", tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    request_body = crate::openapi::CategoryInputDoc,
    responses(
        (status = 200, body = crate::openapi::CategoryDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(changes): ApiJson<CategoryChanges>,
) -> Result<Json<category::Model>, JsonApiError> {
    Ok(Json(state.services.categories.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/category/{id}", tag = "category",
    params(("id" = i64, Path, description = "Category id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse), (status = 409, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
