pub mod errors;
pub mod db;
pub mod traits;

pub mod user;
pub mod category;
pub mod product;
pub mod order;
pub mod order_item;
pub mod review;
pub mod service_offering;
pub mod appointment;

pub use errors::ModelError;
pub use traits::{HasId, Patch, Validate};

#[cfg(test)]
mod tests;
