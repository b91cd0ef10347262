use axum::{extract::State, Json};
use tracing::info;

use service::auth::domain::{AuthSession, LoginInput};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

/// Check credentials; no token or cookie is issued.
#[utoipa::path(
    post, path = "/auth/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Credentials match", body = crate::openapi::LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn login(State(state): State<ServerState>, ApiJson(input): ApiJson<LoginInput>) -> Result<Json<AuthSession>, JsonApiError> {
    let session = state.services.auth.login(input).await?;
    info!(user_id = session.user_id, "login accepted");
    Ok(Json(session))
}
