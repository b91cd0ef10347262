//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! The schemas mirror the JSON the handlers exchange. Money is a decimal
//! string and timestamps are RFC 3339.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Not Found")]
    pub error: String,
    pub message: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginRequest {
    /// Full name or email
    pub username: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: i64,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[schema(example = "customer")]
    pub role: String,
    pub profile_image_url: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDoc {
    /// Also accepted as `username`
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDoc {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDoc {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "8999.00")]
    pub price: String,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub model_year: Option<i32>,
    pub engine_cc: Option<i32>,
    pub color: Option<String>,
    #[schema(example = "new")]
    pub condition_status: String,
    pub created_at: String,
}

/// `name` and `price` are required on create.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInputDoc {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub model_year: Option<i32>,
    pub engine_cc: Option<i32>,
    pub color: Option<String>,
    pub condition_status: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDoc {
    pub id: i64,
    pub user_id: i64,
    pub order_date: String,
    #[schema(example = "129.90")]
    pub total_amount: String,
    #[schema(example = "pending")]
    pub status: String,
    pub shipping_address: String,
    pub payment_method: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDoc {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDoc {
    pub user_id: i64,
    pub order_date: Option<String>,
    pub status: Option<String>,
    pub shipping_address: String,
    pub payment_method: Option<String>,
    pub items: Vec<OrderLineDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderChangesDoc {
    pub user_id: Option<i64>,
    pub order_date: Option<String>,
    pub total_amount: Option<String>,
    pub status: Option<String>,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
}

/// Order fields flattened next to `items`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsDoc {
    pub id: i64,
    pub user_id: i64,
    pub order_date: String,
    pub total_amount: String,
    pub status: String,
    pub shipping_address: String,
    pub payment_method: Option<String>,
    pub items: Vec<OrderItemDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDoc {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInputDoc {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
    pub unit_price: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDoc {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewInputDoc {
    pub product_id: Option<i64>,
    pub user_id: Option<i64>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingDoc {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub base_price: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOfferingInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub base_price: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDoc {
    pub id: i64,
    pub user_id: i64,
    pub service_id: Option<i64>,
    pub vehicle_details: Option<String>,
    pub appointment_date: Option<String>,
    #[schema(example = "scheduled")]
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInputDoc {
    pub user_id: Option<i64>,
    pub service_id: Option<i64>,
    pub vehicle_details: Option<String>,
    pub appointment_date: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::categories::list,
        crate::routes::categories::get,
        crate::routes::categories::create,
        crate::routes::categories::update,
        crate::routes::categories::delete,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::create,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::orders::list_by_user,
        crate::routes::orders::items,
        crate::routes::order_items::list,
        crate::routes::order_items::get,
        crate::routes::order_items::create,
        crate::routes::order_items::update,
        crate::routes::order_items::delete,
        crate::routes::reviews::list,
        crate::routes::reviews::get,
        crate::routes::reviews::create,
        crate::routes::reviews::update,
        crate::routes::reviews::delete,
        crate::routes::service_offerings::list,
        crate::routes::service_offerings::get,
        crate::routes::service_offerings::create,
        crate::routes::service_offerings::update,
        crate::routes::service_offerings::delete,
        crate::routes::appointments::list,
        crate::routes::appointments::get,
        crate::routes::appointments::create,
        crate::routes::appointments::update,
        crate::routes::appointments::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            LoginRequest,
            LoginResponse,
            UserDoc,
            CreateUserDoc,
            UpdateUserDoc,
            CategoryDoc,
            CategoryInputDoc,
            ProductDoc,
            ProductInputDoc,
            OrderDoc,
            OrderLineDoc,
            CreateOrderDoc,
            OrderChangesDoc,
            OrderDetailsDoc,
            OrderItemDoc,
            OrderItemInputDoc,
            ReviewDoc,
            ReviewInputDoc,
            ServiceOfferingDoc,
            ServiceOfferingInputDoc,
            AppointmentDoc,
            AppointmentInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "user"),
        (name = "category"),
        (name = "product"),
        (name = "order"),
        (name = "orderitem"),
        (name = "review"),
        (name = "service"),
        (name = "appointment")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_entity_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/auth/login",
            "/user/{id}",
            "/category",
            "/product/{id}",
            "/order/user/{user_id}",
            "/order/{id}/items",
            "/orderitem",
            "/review/{id}",
            "/service",
            "/appointment/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
