use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::product;
use crate::traits::{self, HasId, Patch, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Products,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Products => Entity::has_many(product::Entity).into() }
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef { Relation::Products.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl IntoActiveModel<ActiveModel> for NewCategory {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(self.description),
            image_url: Set(self.image_url),
        }
    }
}

impl Validate for NewCategory {
    fn validate(&self) -> Result<(), ModelError> {
        traits::non_empty("name", &self.name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Patch<Model> for CategoryChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.name { model.name = v; }
        if let Some(v) = self.description { model.description = Some(v); }
        if let Some(v) = self.image_url { model.image_url = Some(v); }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.image_url.is_none()
    }
}

impl Validate for CategoryChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.name, |v| traits::non_empty("name", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_deserialize_with_missing_fields() {
        let c: CategoryChanges = serde_json::from_str(r#"{"description":"Road bikes"}"#).unwrap();
        assert_eq!(c.description.as_deref(), Some("Road bikes"));
        assert!(c.name.is_none());
        assert!(!c.is_empty());
    }

    #[test]
    fn blank_name_is_rejected() {
        let draft = NewCategory { name: " ".into(), description: None, image_url: None };
        assert!(draft.validate().is_err());
    }
}
