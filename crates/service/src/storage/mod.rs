//! Storage abstractions for service layer
//!
//! Uploaded images are written under a local directory and referenced by
//! their generated file name.

pub mod uploads;

pub use uploads::{stored_file_name, ImageStore, LocalImageStore};
