use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::appointment::{self, NewAppointment, AppointmentChanges};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

#[utoipa::path(get, path = "/appointment", tag = "appointment", responses((status = 200, body = [crate::openapi::AppointmentDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<appointment::Model>>, JsonApiError> {
    Ok(Json(state.services.appointments.list().await?))
}

#[utoipa::path(
    get, path = "/appointment/{id}", tag = "appointment",
    params(("id" = i64, Path, description = "Appointment id")),
    responses((status = 200, body = crate::openapi::AppointmentDoc), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<appointment::Model>, JsonApiError> {
    Ok(Json(state.services.appointments.get(id).await?))
}

#[utoipa::path(
    post, path = "/appointment", tag = "appointment",
    request_body = crate::openapi::AppointmentInputDoc,
    responses((status = 200, body = crate::openapi::AppointmentDoc), (status = 400, body = crate::openapi::ErrorResponse))
)]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(draft): ApiJson<NewAppointment>,
) -> Result<Json<appointment::Model>, JsonApiError> {
    Ok(Json(state.services.appointments.create(draft).await?))
}

#[utoipa::path(
    put, path = "/appointment/{id}", tag = "appointment",
    params(("id" = i64, Path, description = "Appointment id")),
    request_body = crate::openapi::AppointmentInputDoc,
    responses(
        (status = 200, body = crate::openapi::AppointmentDoc),
        (status = 400, body = crate::openapi::ErrorResponse),
        (status = 404, body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    ApiJson(changes): ApiJson<AppointmentChanges>,
) -> Result<Json<appointment::Model>, JsonApiError> {
    Ok(Json(state.services.appointments.update(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/appointment/{id}", tag = "appointment",
    params(("id" = i64, Path, description = "Appointment id")),
    responses((status = 204), (status = 404, body = crate::openapi::ErrorResponse))
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.services.appointments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
