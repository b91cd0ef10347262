use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::order_item::{self, NewOrderItem, OrderItemChanges};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/orderitem", tag = "orderitem", responses((status = 200, body = [crate::openapi::OrderItemDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<order_item::Model>>, JsonApiError> {
    Ok(Json(state.services.order_items.list().await?))
}

#[utoipa::path(
    get, path = "/orderitem/{id}", tag = "orderitem",
    params(("id" = i64, Path, description = "Order item id")),
    responses((status = 200, body = crate::openapi::OrderItemDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<order_item::Model>, JsonApiError> {
    Ok(Json(state.services.order_items.get(id).await?))
}

/// The referenced order and product must exist.
#[utoipa::path(
    post, path = "/orderitem", tag = "orderitem",
    request_body = crate::openapi::OrderItemInputDoc,
    responses((status = 200, body = crate::openapi::OrderItemDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(draft): ApiJson<NewOrderItem>,
) -> Result<Json<order_item::Model>, JsonApiError> {
    Ok(Json(state.services.order_items.create(draft).await?))
}

#[utoipa::path(
    put, path = "/orderitem/{id}", tag = "orderitem",
    params(("id" = i64, Path, description = "Order item id")),
    request_body = crate::openapi::OrderItemInputDoc,
    responses(
        (status = 200, body = crate::openapi::OrderItemDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(changes): ApiJson<OrderItemChanges>,
) -> Result<Json<order_item::Model>, JsonApiError> {
    Ok(Json(state.services.order_items.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/orderitem/{id}", tag = "orderitem",
    params(("id" = i64, Path, description = "Order item id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.order_items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
