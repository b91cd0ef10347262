use chrono::Utc;
use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};
use crate::{product, user};

pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub rating: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity)
                .from(Column::ProductId)
                .to(product::Column::Id)
                .into(),
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

fn rating(value: i32) -> Result<(), ModelError> {
    if !RATING_RANGE.contains(&value) {
        return Err(ModelError::invalid("rating must be between 1 and 5"));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub product_id: i64,
    pub user_id: i64,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl IntoActiveModel<ActiveModel> for NewReview {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            product_id: Set(self.product_id),
            user_id: Set(self.user_id),
            rating: Set(self.rating),
            comment: Set(self.comment),
            created_at: Set(Utc::now().into()),
        }
    }
}

impl Validate for NewReview {
    fn validate(&self) -> Result<(), ModelError> {
        rating(self.rating)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewChanges {
    pub product_id: Option<i64>,
    pub user_id: Option<i64>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl Patch<Model> for ReviewChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.product_id { model.product_id = v; }
        if let Some(v) = self.user_id { model.user_id = v; }
        if let Some(v) = self.rating { model.rating = v; }
        if let Some(v) = self.comment { model.comment = Some(v); }
    }

    fn is_empty(&self) -> bool {
        self.product_id.is_none() && self.user_id.is_none() && self.rating.is_none() && self.comment.is_none()
    }
}

impl Validate for ReviewChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.rating, |v| rating(*v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        for (value, ok) in [(0, false), (1, true), (5, true), (6, false)] {
            let r = NewReview { product_id: 1, user_id: 1, rating: value, comment: None };
            assert_eq!(r.validate().is_ok(), ok, "rating {value}");
        }
    }
}
