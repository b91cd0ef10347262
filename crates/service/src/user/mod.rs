//! Users: CRUD with password hashing, plus the lookups login needs.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::UserRepository;
pub use service::UserService;
