use std::path::Path;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod appointments;
pub mod auth;
pub mod categories;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod service_offerings;
pub mod users;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Router options that come from configuration.
#[derive(Debug, Clone)]
pub struct RouterConfig<'a> {
    pub upload_dir: &'a Path,
    pub max_body_bytes: usize,
}

/// Build the full application router: entity CRUD, auth, uploads and docs
pub fn build_router(state: ServerState, cors: CorsLayer, cfg: RouterConfig<'_>) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/auth/login", post(auth::login))
        .route("/user", get(users::list).post(users::create))
        .route("/user/:id", get(users::get).put(users::update).delete(users::delete))
        .route("/category", get(categories::list).post(categories::create))
        .route("/category/:id", get(categories::get).put(categories::update).delete(categories::delete))
        .route("/product", get(products::list).post(products::create))
        .route("/product/:id", get(products::get).put(products::update).delete(products::delete))
        .route("/order", get(orders::list).post(orders::create))
        .route("/order/:id", get(orders::get).put(orders::update).delete(orders::delete))
        .route("/order/:id/items", get(orders::items))
        .route("/order/user/:user_id", get(orders::list_by_user))
        .route("/orderitem", get(order_items::list).post(order_items::create))
        .route("/orderitem/:id", get(order_items::get).put(order_items::update).delete(order_items::delete))
        .route("/review", get(reviews::list).post(reviews::create))
        .route("/review/:id", get(reviews::get).put(reviews::update).delete(reviews::delete))
        .route("/service", get(service_offerings::list).post(service_offerings::create))
        .route(
            "/service/:id",
            get(service_offerings::get).put(service_offerings::update).delete(service_offerings::delete),
        )
        .route("/appointment", get(appointments::list).post(appointments::create))
        .route(
            "/appointment/:id",
            get(appointments::get).put(appointments::update).delete(appointments::delete),
        )
        .nest_service("/uploads", ServeDir::new(cfg.upload_dir))
        .with_state(state);

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(cfg.max_body_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
