use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};
use crate::{order, product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub unit_price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Order,
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Order => Entity::belongs_to(order::Entity)
                .from(Column::OrderId)
                .to(order::Column::Id)
                .into(),
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl NewOrderItem {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl IntoActiveModel<ActiveModel> for NewOrderItem {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            order_id: Set(self.order_id),
            product_id: Set(self.product_id),
            quantity: Set(self.quantity),
            unit_price: Set(self.unit_price),
        }
    }
}

impl Validate for NewOrderItem {
    fn validate(&self) -> Result<(), ModelError> {
        traits::at_least("quantity", self.quantity, 1)?;
        traits::non_negative("unitPrice", self.unit_price)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemChanges {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
}

impl Patch<Model> for OrderItemChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.order_id { model.order_id = v; }
        if let Some(v) = self.product_id { model.product_id = v; }
        if let Some(v) = self.quantity { model.quantity = v; }
        if let Some(v) = self.unit_price { model.unit_price = v; }
    }

    fn is_empty(&self) -> bool {
        self.order_id.is_none() && self.product_id.is_none() && self.quantity.is_none() && self.unit_price.is_none()
    }
}

impl Validate for OrderItemChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.quantity, |v| traits::at_least("quantity", *v, 1))?;
        traits::when(&self.unit_price, |v| traits::non_negative("unitPrice", *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quantity_is_rejected() {
        let item = NewOrderItem { order_id: 1, product_id: 2, quantity: 0, unit_price: Decimal::ONE };
        assert!(item.validate().is_err());
        let changes = OrderItemChanges { quantity: Some(0), ..Default::default() };
        assert!(changes.validate().is_err());
    }

    #[test]
    fn line_total_multiplies() {
        let item = NewOrderItem { order_id: 1, product_id: 2, quantity: 4, unit_price: Decimal::new(250, 2) };
        assert_eq!(item.line_total(), Decimal::new(1000, 2));
    }
}
