use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use models::order::{self, OrderChanges};
use models::order_item;
use service::order::domain::{CreateOrderInput, OrderDetails};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/order", tag = "order", responses((status = 200, body = [crate::openapi::OrderDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<order::Model>>, JsonApiError> {
    Ok(Json(state.services.orders.list().await?))
}

#[utoipa::path(
    get, path = "/order/{id}", tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, body = crate::openapi::OrderDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<order::Model>, JsonApiError> {
    Ok(Json(state.services.orders.get(id).await?))
}

/// Places an order with its items. The total is computed server-side.
/// Any failure answers 400 `Order Failed`.
#[utoipa::path(
    post, path = "/order", tag = "order",
    request_body = crate::openapi::CreateOrderDoc,
    responses((status = 200, body = crate::openapi::OrderDetailsDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<CreateOrderInput>, JsonRejection>,
) -> Result<Json<OrderDetails>, JsonApiError> {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            let msg = rejection.body_text();
            warn!(error = %msg, "order body rejected");
            return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Order Failed", Some(msg)));
        }
    };
    match state.services.orders.create(input).await {
        Ok(details) => Ok(Json(details)),
        Err(e) => {
            warn!(error = %e, "order creation failed");
            Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Order Failed", Some(e.to_string())))
        }
    }
}

#[utoipa::path(
    put, path = "/order/{id}", tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    request_body = crate::openapi::OrderChangesDoc,
    responses(
        (status = 200, body = crate::openapi::OrderDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(changes): ApiJson<OrderChanges>,
) -> Result<Json<order::Model>, JsonApiError> {
    Ok(Json(state.services.orders.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/order/{id}", tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse), (status = 409, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.orders.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/order/user/{user_id}", tag = "order",
    params(("user_id" = i64, Path, description = "Customer id")),
    responses((status = 200, body = [crate::openapi::OrderDoc]), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<order::Model>>, JsonApiError> {
    Ok(Json(state.services.orders.list_by_user(user_id).await?))
}

#[utoipa::path(
    get, path = "/order/{id}/items", tag = "order",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, body = [crate::openapi::OrderItemDoc]), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn items(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<order_item::Model>>, JsonApiError> {
    Ok(Json(state.services.orders.items(id).await?))
}
