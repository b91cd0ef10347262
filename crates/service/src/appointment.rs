//! Workshop appointments: the customer must exist, and so must the booked
//! service when one is given.

use std::sync::Arc;

use models::appointment::{self, AppointmentChanges, NewAppointment};

use crate::crud::CrudService;
use crate::entities::AppointmentRepository;
use crate::errors::ServiceError;
use crate::references::References;

pub struct AppointmentService {
    crud: CrudService<appointment::Model, NewAppointment, AppointmentChanges>,
    refs: References,
}

impl AppointmentService {
    pub fn new(repo: Arc<AppointmentRepository>, refs: References) -> Self {
        Self { crud: CrudService::new(repo, "appointment"), refs }
    }

    pub async fn list(&self) -> Result<Vec<appointment::Model>, ServiceError> { self.crud.list().await }

    pub async fn get(&self, id: i64) -> Result<appointment::Model, ServiceError> { self.crud.get(id).await }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> { self.crud.delete(id).await }

    pub async fn create(&self, draft: NewAppointment) -> Result<appointment::Model, ServiceError> {
        self.refs.require_user(draft.user_id).await?;
        if let Some(service_id) = draft.service_id {
            self.refs.require_service_offering(service_id).await?;
        }
        self.crud.create(draft).await
    }

    pub async fn update(&self, id: i64, changes: AppointmentChanges) -> Result<appointment::Model, ServiceError> {
        if let Some(user_id) = changes.user_id {
            self.refs.require_user(user_id).await?;
        }
        if let Some(service_id) = changes.service_id {
            self.refs.require_service_offering(service_id).await?;
        }
        self.crud.update(id, changes).await
    }
}
