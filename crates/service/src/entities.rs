//! Repository aliases per entity, and services for entities that need
//! nothing beyond generic CRUD.

use models::{appointment, category, product, review, service_offering};

use crate::crud::{CrudRepository, CrudService};

pub type CategoryRepository = dyn CrudRepository<category::Model, category::NewCategory, category::CategoryChanges>;
pub type CategoryService = CrudService<category::Model, category::NewCategory, category::CategoryChanges>;

pub type ProductRepository = dyn CrudRepository<product::Model, product::NewProduct, product::ProductChanges>;

pub type ReviewRepository = dyn CrudRepository<review::Model, review::NewReview, review::ReviewChanges>;

pub type ServiceOfferingRepository = dyn CrudRepository<
    service_offering::Model,
    service_offering::NewServiceOffering,
    service_offering::ServiceOfferingChanges,
>;
pub type ServiceOfferingService = CrudService<
    service_offering::Model,
    service_offering::NewServiceOffering,
    service_offering::ServiceOfferingChanges,
>;

pub type AppointmentRepository =
    dyn CrudRepository<appointment::Model, appointment::NewAppointment, appointment::AppointmentChanges>;
