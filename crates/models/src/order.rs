//! `orders` table. The total is computed from the items when an order is placed.
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};
use crate::{order_item, user};

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub order_date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub shipping_address: String,
    pub payment_method: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Items,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Items => Entity::has_many(order_item::Entity).into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<order_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::Items.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

/// Order header as written to storage, total already computed.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub order_date: Option<DateTimeWithTimeZone>,
    pub total_amount: Decimal,
    pub status: Option<String>,
    pub shipping_address: String,
    pub payment_method: Option<String>,
}

impl IntoActiveModel<ActiveModel> for NewOrder {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            user_id: Set(self.user_id),
            order_date: Set(self.order_date.unwrap_or_else(|| Utc::now().into())),
            total_amount: Set(self.total_amount),
            status: Set(self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            shipping_address: Set(self.shipping_address),
            payment_method: Set(self.payment_method),
        }
    }
}

impl Validate for NewOrder {
    fn validate(&self) -> Result<(), ModelError> {
        traits::non_empty("shippingAddress", &self.shipping_address)?;
        traits::non_negative("totalAmount", self.total_amount)?;
        traits::when(&self.status, |v| traits::non_empty("status", v))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderChanges {
    pub user_id: Option<i64>,
    pub order_date: Option<DateTimeWithTimeZone>,
    pub total_amount: Option<Decimal>,
    pub status: Option<String>,
    pub shipping_address: Option<String>,
    pub payment_method: Option<String>,
}

impl Patch<Model> for OrderChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.user_id { model.user_id = v; }
        if let Some(v) = self.order_date { model.order_date = v; }
        if let Some(v) = self.total_amount { model.total_amount = v; }
        if let Some(v) = self.status { model.status = v; }
        if let Some(v) = self.shipping_address { model.shipping_address = v; }
        if let Some(v) = self.payment_method { model.payment_method = Some(v); }
    }

    fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.order_date.is_none()
            && self.total_amount.is_none()
            && self.status.is_none()
            && self.shipping_address.is_none()
            && self.payment_method.is_none()
    }
}

impl Validate for OrderChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.total_amount, |v| traits::non_negative("totalAmount", *v))?;
        traits::when(&self.status, |v| traits::non_empty("status", v))?;
        traits::when(&self.shipping_address, |v| traits::non_empty("shippingAddress", v))
    }
}

/// Σ unit_price × quantity over `(unit_price, quantity)` pairs.
pub fn total_of<I>(lines: I) -> Decimal
where
    I: IntoIterator<Item = (Decimal, i32)>,
{
    lines
        .into_iter()
        .map(|(price, qty)| price * Decimal::from(qty))
        .sum()
}
