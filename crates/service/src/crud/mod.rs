//! Generic create/read/update/delete shared by every entity.
//!
//! - `repository`: storage contract plus the in-memory implementation.
//! - `seaorm`: the same contract over a relational database.
//! - `service`: validation, not-found mapping and logging on top.

pub mod repository;
pub mod seaorm;
pub mod service;

pub use repository::{memory::MemoryRepository, CrudRepository};
pub use seaorm::SeaOrmRepository;
pub use service::CrudService;
