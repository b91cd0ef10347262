use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};
use crate::{service_offering, user};

pub const DEFAULT_STATUS: &str = "scheduled";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub service_id: Option<i64>,
    pub vehicle_details: Option<String>,
    pub appointment_date: Option<DateTimeWithTimeZone>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
            Relation::Service => Entity::belongs_to(service_offering::Entity)
                .from(Column::ServiceId)
                .to(service_offering::Column::Id)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<service_offering::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub user_id: i64,
    #[serde(default)]
    pub service_id: Option<i64>,
    #[serde(default)]
    pub vehicle_details: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl IntoActiveModel<ActiveModel> for NewAppointment {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            user_id: Set(self.user_id),
            service_id: Set(self.service_id),
            vehicle_details: Set(self.vehicle_details),
            appointment_date: Set(self.appointment_date),
            status: Set(self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            notes: Set(self.notes),
        }
    }
}

impl Validate for NewAppointment {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.status, |v| traits::non_empty("status", v))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentChanges {
    pub user_id: Option<i64>,
    pub service_id: Option<i64>,
    pub vehicle_details: Option<String>,
    pub appointment_date: Option<DateTimeWithTimeZone>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Patch<Model> for AppointmentChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.user_id { model.user_id = v; }
        if let Some(v) = self.service_id { model.service_id = Some(v); }
        if let Some(v) = self.vehicle_details { model.vehicle_details = Some(v); }
        if let Some(v) = self.appointment_date { model.appointment_date = Some(v); }
        if let Some(v) = self.status { model.status = v; }
        if let Some(v) = self.notes { model.notes = Some(v); }
    }

    fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.service_id.is_none()
            && self.vehicle_details.is_none()
            && self.appointment_date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

impl Validate for AppointmentChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.status, |v| traits::non_empty("status", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_scheduled() {
        let draft: NewAppointment = serde_json::from_str(r#"{"userId":3,"serviceId":1,"vehicleDetails":"Honda CB500F 2021"}"#).unwrap();
        let am = draft.into_active_model();
        assert_eq!(am.status, Set(DEFAULT_STATUS.to_string()));
        assert_eq!(am.service_id, Set(Some(1)));
    }
}
