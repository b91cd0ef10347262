//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod crud;
pub mod entities;
pub mod references;
pub mod user;
pub mod auth;
pub mod order;
pub mod order_item;
pub mod product;
pub mod review;
pub mod appointment;
pub mod storage;
pub mod registry;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use registry::Services;
