//! `services` table: workshop services customers can book.
//!
//! Named `service_offering` to keep it apart from the service layer.
use rust_decimal::Decimal;
use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::appointment;
use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub base_price: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Appointments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Appointments => Entity::has_many(appointment::Entity).into() }
    }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointments.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceOffering {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_duration_minutes: Option<i32>,
    #[serde(default)]
    pub base_price: Option<Decimal>,
}

impl IntoActiveModel<ActiveModel> for NewServiceOffering {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(self.description),
            estimated_duration_minutes: Set(self.estimated_duration_minutes),
            base_price: Set(self.base_price),
        }
    }
}

impl Validate for NewServiceOffering {
    fn validate(&self) -> Result<(), ModelError> {
        traits::non_empty("name", &self.name)?;
        traits::when(&self.estimated_duration_minutes, |v| traits::at_least("estimatedDurationMinutes", *v, 0))?;
        traits::when(&self.base_price, |v| traits::non_negative("basePrice", *v))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceOfferingChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub estimated_duration_minutes: Option<i32>,
    pub base_price: Option<Decimal>,
}

impl Patch<Model> for ServiceOfferingChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.name { model.name = v; }
        if let Some(v) = self.description { model.description = Some(v); }
        if let Some(v) = self.estimated_duration_minutes { model.estimated_duration_minutes = Some(v); }
        if let Some(v) = self.base_price { model.base_price = Some(v); }
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.estimated_duration_minutes.is_none()
            && self.base_price.is_none()
    }
}

impl Validate for ServiceOfferingChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.name, |v| traits::non_empty("name", v))?;
        traits::when(&self.estimated_duration_minutes, |v| traits::at_least("estimatedDurationMinutes", *v, 0))?;
        traits::when(&self.base_price, |v| traits::non_negative("basePrice", *v))
    }
}
