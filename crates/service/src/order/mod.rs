//! Orders: placement with line items, per-user listing and plain CRUD.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::OrderRepository;
pub use service::OrderService;
