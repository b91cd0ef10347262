use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::service_offering::{self, NewServiceOffering, ServiceOfferingChanges};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/service", tag = "service", responses((status = 200, body = [crate::openapi::ServiceOfferingDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<service_offering::Model>>, JsonApiError> {
    Ok(Json(state.services.service_offerings.list().await?))
}

#[utoipa::path(
    get, path = "/service/{id}", tag = "service",
    params(("id" = i64, Path, description = "Service id")),
    responses((status = 200, body = crate::openapi::ServiceOfferingDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<service_offering::Model>, JsonApiError> {
    Ok(Json(state.services.service_offerings.get(id).await?))
}

#[utoipa::path(
    post, path = "/service", tag = "service",
    request_body = crate::openapi::ServiceOfferingInputDoc,
    responses((status = 200, body = crate::openapi::ServiceOfferingDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(draft): ApiJson<NewServiceOffering>,
) -> Result<Json<service_offering::Model>, JsonApiError> {
    Ok(Json(state.services.service_offerings.create(draft).await?))
}

#[utoipa::path(
    put, path = "/service/{id}", tag = "service",
    params(("id" = i64, Path, description = "Service id")),
    request_body = crate::openapi::ServiceOfferingInputDoc,
    responses(
        (status = 200, body = crate::openapi::ServiceOfferingDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(changes): ApiJson<ServiceOfferingChanges>,
) -> Result<Json<service_offering::Model>, JsonApiError> {
    Ok(Json(state.services.service_offerings.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/service/{id}", tag = "service",
    params(("id" = i64, Path, description = "Service id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse), (status = 409, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.service_offerings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
