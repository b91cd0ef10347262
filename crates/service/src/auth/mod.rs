//! Auth module: credential check against stored bcrypt hashes.
//!
//! No session or token is issued; a successful login only yields the user id.

pub mod domain;
pub mod errors;
pub mod password;
pub mod service;

pub use service::AuthService;
