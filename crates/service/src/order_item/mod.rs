//! Order items as a resource of their own.

pub mod repository;
pub mod service;

pub use repository::OrderItemRepository;
pub use service::OrderItemService;
