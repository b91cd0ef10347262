use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::registry::Services;
use service::storage::{ImageStore, LocalImageStore};

/// Shared handler state: every entity service plus the image store.
#[derive(Clone)]
pub struct ServerState {
    pub services: Services,
    pub images: Arc<dyn ImageStore>,
}

impl ServerState {
    pub fn new(services: Services, images: Arc<dyn ImageStore>) -> Self { Self { services, images } }

    /// Database-backed state built from the application config.
    pub fn connect(db: DatabaseConnection, cfg: &configs::AppConfig) -> Self {
        Self::new(
            Services::seaorm(db, cfg.auth.bcrypt_cost),
            Arc::new(LocalImageStore::new(cfg.uploads.dir.clone())),
        )
    }

    /// In-memory repositories; images still go to `upload_dir`.
    pub fn in_memory<P: Into<PathBuf>>(upload_dir: P, bcrypt_cost: u32) -> Self {
        Self::new(Services::in_memory(bcrypt_cost), Arc::new(LocalImageStore::new(upload_dir)))
    }
}
