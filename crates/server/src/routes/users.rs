use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use models::user;
use service::user::domain::{CreateUserInput, UpdateUserInput};

use crate::errors::JsonApiError;
use crate::extract::JsonWithImage;
use crate::state::ServerState;

#[utoipa::path(get, path = "/user", tag = "user", responses((status = 200, body = [crate::openapi::UserDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<user::Model>>, JsonApiError> {
    Ok(Json(state.services.users.list().await?))
}

#[utoipa::path(
    get, path = "/user/{id}", tag = "user",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = crate::openapi::UserDoc),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<user::Model>, JsonApiError> {
    Ok(Json(state.services.users.get(id).await?))
}

/// JSON body, or multipart with a `user` JSON part and an optional image.
#[utoipa::path(
    post, path = "/user", tag = "user",
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 200, body = crate::openapi::UserDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 409, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: JsonWithImage<CreateUserInput>,
) -> Result<Json<user::Model>, JsonApiError> {
    let JsonWithImage { payload: mut input, image } = body;
    if let Some(img) = image {
        input.profile_image_url = Some(state.images.save(&img.file_name, &img.bytes).await?);
    }
    let created = state.services.users.create(input).await?;
    info!(user_id = created.id, "user registered");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/user/{id}", tag = "user",
    params(("id" = i64, Path, description = "User id")),
    request_body = crate::openapi::UpdateUserDoc,
    responses(
        (status = 200, body = crate::openapi::UserDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    body: JsonWithImage<UpdateUserInput>,
) -> Result<Json<user::Model>, JsonApiError> {
    let JsonWithImage { payload: mut input, image } = body;
    if let Some(img) = image {
        input.profile_image_url = Some(state.images.save(&img.file_name, &img.bytes).await?);
    }
    Ok(Json(state.services.users.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/user/{id}", tag = "user",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse), (status = 409, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
