use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::product::{self, NewProduct, ProductChanges};

use crate::errors::JsonApiError;
use crate::extract::JsonWithImage;
use crate::state::ServerState;

#[utoipa::path(get, path = "/product", tag = "product", responses((status = 200, body = [crate::openapi::ProductDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    Ok(Json(state.services.products.list().await?))
}

#[utoipa::path(
    get, path = "/product/{id}", tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    responses((status = 200, body = crate::openapi::ProductDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<product::Model>, JsonApiError> {
    Ok(Json(state.services.products.get(id).await?))
}

/// JSON body, or multipart with a `product` JSON part and an optional image.
#[utoipa::path(
    post, path = "/product", tag = "product",
    request_body = crate::openapi::ProductInputDoc,
    responses((status = 200, body = crate::openapi::ProductDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    body: JsonWithImage<NewProduct>,
) -> Result<Json<product::Model>, JsonApiError> {
    let JsonWithImage { payload: mut draft, image } = body;
    if let Some(img) = image {
        draft.image_url = Some(state.images.save(&img.file_name, &img.bytes).await?);
    }
    Ok(Json(state.services.products.create(draft).await?))
}

#[utoipa::path(
    put, path = "/product/{id}", tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, body = crate::openapi::ProductDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    body: JsonWithImage<ProductChanges>,
) -> Result<Json<product::Model>, JsonApiError> {
    let JsonWithImage { payload: mut changes, image } = body;
    if let Some(img) = image {
        changes.image_url = Some(state.images.save(&img.file_name, &img.bytes).await?);
    }
    Ok(Json(state.services.products.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/product/{id}", tag = "product",
    params(("id" = i64, Path, description = "Product id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse), (status = 409, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.products.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
