//! `products` table: motorcycles, parts and gear for sale.
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};
use crate::{category, order_item, review};

pub const DEFAULT_CONDITION: &str = "new";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: Option<i64>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub model_year: Option<i32>,
    pub engine_cc: Option<i32>,
    pub color: Option<String>,
    pub condition_status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
    OrderItems,
    Reviews,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
            Relation::OrderItems => Entity::has_many(order_item::Entity).into(),
            Relation::Reviews => Entity::has_many(review::Entity).into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<order_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderItems.def() }
}

impl Related<review::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reviews.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[serde(default)]
    pub category_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model_year: Option<i32>,
    #[serde(default)]
    pub engine_cc: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub condition_status: Option<String>,
}

impl IntoActiveModel<ActiveModel> for NewProduct {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            category_id: Set(self.category_id),
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            stock_quantity: Set(self.stock_quantity.unwrap_or(0)),
            image_url: Set(self.image_url),
            brand: Set(self.brand),
            model_year: Set(self.model_year),
            engine_cc: Set(self.engine_cc),
            color: Set(self.color),
            condition_status: Set(self.condition_status.unwrap_or_else(|| DEFAULT_CONDITION.to_string())),
            created_at: Set(Utc::now().into()),
        }
    }
}

impl Validate for NewProduct {
    fn validate(&self) -> Result<(), ModelError> {
        traits::non_empty("name", &self.name)?;
        traits::non_negative("price", self.price)?;
        traits::when(&self.stock_quantity, |v| traits::at_least("stockQuantity", *v, 0))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductChanges {
    pub category_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    pub model_year: Option<i32>,
    pub engine_cc: Option<i32>,
    pub color: Option<String>,
    pub condition_status: Option<String>,
}

impl Patch<Model> for ProductChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.category_id { model.category_id = Some(v); }
        if let Some(v) = self.name { model.name = v; }
        if let Some(v) = self.description { model.description = Some(v); }
        if let Some(v) = self.price { model.price = v; }
        if let Some(v) = self.stock_quantity { model.stock_quantity = v; }
        if let Some(v) = self.image_url { model.image_url = Some(v); }
        if let Some(v) = self.brand { model.brand = Some(v); }
        if let Some(v) = self.model_year { model.model_year = Some(v); }
        if let Some(v) = self.engine_cc { model.engine_cc = Some(v); }
        if let Some(v) = self.color { model.color = Some(v); }
        if let Some(v) = self.condition_status { model.condition_status = v; }
    }

    fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock_quantity.is_none()
            && self.image_url.is_none()
            && self.brand.is_none()
            && self.model_year.is_none()
            && self.engine_cc.is_none()
            && self.color.is_none()
            && self.condition_status.is_none()
    }
}

impl Validate for ProductChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.name, |v| traits::non_empty("name", v))?;
        traits::when(&self.price, |v| traits::non_negative("price", *v))?;
        traits::when(&self.stock_quantity, |v| traits::at_least("stockQuantity", *v, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn draft_accepts_string_or_number_price() {
        let a: NewProduct = serde_json::from_str(r#"{"name":"Helmet","price":"129.90"}"#).unwrap();
        let b: NewProduct = serde_json::from_str(r#"{"name":"Helmet","price":129.9}"#).unwrap();
        assert_eq!(a.price, Decimal::from_str("129.90").unwrap());
        assert_eq!(a.price, b.price);
    }

    #[test]
    fn draft_fills_defaults() {
        let draft: NewProduct = serde_json::from_str(r#"{"name":"Chain","price":"35.00"}"#).unwrap();
        let am = draft.into_active_model();
        assert_eq!(am.stock_quantity, Set(0));
        assert_eq!(am.condition_status, Set(DEFAULT_CONDITION.to_string()));
    }

    #[test]
    fn negative_price_is_rejected() {
        let draft: NewProduct = serde_json::from_str(r#"{"name":"Chain","price":"-1.00"}"#).unwrap();
        assert!(draft.validate().is_err());
        let changes = ProductChanges { price: Some(Decimal::new(-5, 0)), ..Default::default() };
        assert!(changes.validate().is_err());
    }

    #[test]
    fn patch_updates_price_only() {
        let mut m = Model {
            id: 7,
            category_id: Some(1),
            name: "Visor".into(),
            description: None,
            price: Decimal::new(2500, 2),
            stock_quantity: 3,
            image_url: Some("a_visor.png".into()),
            brand: None,
            model_year: None,
            engine_cc: None,
            color: None,
            condition_status: DEFAULT_CONDITION.into(),
            created_at: Utc::now().into(),
        };
        let before = m.clone();
        ProductChanges { price: Some(Decimal::new(1999, 2)), ..Default::default() }.apply(&mut m);
        assert_eq!(m.price, Decimal::new(1999, 2));
        assert_eq!(Model { price: before.price, ..m.clone() }, before);
    }
}
