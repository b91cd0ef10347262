//! `users` table: shop customers and staff.
//!
//! Only the bcrypt hash of the password is stored; it is never serialized.
use chrono::Utc;
use sea_orm::{entity::prelude::*, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::traits::{self, HasId, Patch, Validate};
use crate::{appointment, order, review};

pub const DEFAULT_ROLE: &str = "customer";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone_number: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub role: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Orders,
    Reviews,
    Appointments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Orders => Entity::has_many(order::Entity).into(),
            Relation::Reviews => Entity::has_many(review::Entity).into(),
            Relation::Appointments => Entity::has_many(appointment::Entity).into(),
        }
    }
}

impl Related<order::Entity> for Entity {
    fn to() -> RelationDef { Relation::Orders.def() }
}

impl Related<review::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reviews.def() }
}

impl Related<appointment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Appointments.def() }
}

impl ActiveModelBehavior for ActiveModel {}

impl HasId for Model {
    fn id(&self) -> i64 { self.id }
}

/// A user ready to be stored; the password is already hashed.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub profile_image_url: Option<String>,
}

impl IntoActiveModel<ActiveModel> for NewUser {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            full_name: Set(self.full_name),
            email: Set(self.email),
            password_hash: Set(self.password_hash),
            phone_number: Set(self.phone_number),
            address: Set(self.address),
            role: Set(self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string())),
            profile_image_url: Set(self.profile_image_url),
            created_at: Set(Utc::now().into()),
        }
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ModelError> {
        traits::non_empty("fullName", &self.full_name)?;
        traits::email(&self.email)?;
        traits::non_empty("passwordHash", &self.password_hash)?;
        traits::when(&self.role, |r| traits::non_empty("role", r))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserChanges {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    pub profile_image_url: Option<String>,
}

impl Patch<Model> for UserChanges {
    fn apply(self, model: &mut Model) {
        if let Some(v) = self.full_name { model.full_name = v; }
        if let Some(v) = self.email { model.email = v; }
        if let Some(v) = self.password_hash { model.password_hash = v; }
        if let Some(v) = self.phone_number { model.phone_number = Some(v); }
        if let Some(v) = self.address { model.address = Some(v); }
        if let Some(v) = self.role { model.role = v; }
        if let Some(v) = self.profile_image_url { model.profile_image_url = Some(v); }
    }

    fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.phone_number.is_none()
            && self.address.is_none()
            && self.role.is_none()
            && self.profile_image_url.is_none()
    }
}

impl Validate for UserChanges {
    fn validate(&self) -> Result<(), ModelError> {
        traits::when(&self.full_name, |v| traits::non_empty("fullName", v))?;
        traits::when(&self.email, |v| traits::email(v))?;
        traits::when(&self.role, |v| traits::non_empty("role", v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Model {
        Model {
            id: 1,
            full_name: "Ana Ruiz".into(),
            email: "ana@example.com".into(),
            password_hash: "$2b$04$hash".into(),
            phone_number: None,
            address: Some("Calle 1".into()),
            role: DEFAULT_ROLE.into(),
            profile_image_url: None,
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn hash_is_not_serialized() {
        let json = serde_json::to_value(stored()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["fullName"], "Ana Ruiz");
        assert_eq!(json["role"], "customer");
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut m = stored();
        let before = m.clone();
        UserChanges { phone_number: Some("555-0101".into()), ..Default::default() }.apply(&mut m);
        assert_eq!(m.phone_number.as_deref(), Some("555-0101"));
        assert_eq!(m.full_name, before.full_name);
        assert_eq!(m.address, before.address);
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut m = stored();
        let before = m.clone();
        let changes = UserChanges::default();
        assert!(changes.is_empty());
        changes.apply(&mut m);
        assert_eq!(m, before);
    }

    #[test]
    fn draft_defaults_role() {
        let draft = NewUser {
            full_name: "Ana".into(),
            email: "ana@example.com".into(),
            password_hash: "x".into(),
            phone_number: None,
            address: None,
            role: None,
            profile_image_url: None,
        };
        let am = draft.into_active_model();
        assert_eq!(am.role, Set(DEFAULT_ROLE.to_string()));
        assert!(am.id.is_not_set());
    }

    #[test]
    fn rejects_malformed_email() {
        let changes = UserChanges { email: Some("not-an-email".into()), ..Default::default() };
        assert!(matches!(changes.validate(), Err(ModelError::Validation(_))));
    }
}
