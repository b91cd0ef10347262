use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use models::{order, order_item};

/// One line of a new order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineInput {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Order placement payload. Any `totalAmount` sent by the client is
/// ignored; the total is always computed from `items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub user_id: i64,
    #[serde(default)]
    pub order_date: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub status: Option<String>,
    pub shipping_address: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLineInput>,
}

impl CreateOrderInput {
    pub fn total(&self) -> Decimal {
        order::total_of(self.items.iter().map(|l| (l.unit_price, l.quantity)))
    }
}

/// An order together with its stored items.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: order::Model,
    pub items: Vec<order_item::Model>,
}
