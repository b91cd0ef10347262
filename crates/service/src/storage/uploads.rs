use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Destination for uploaded images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` and return the generated file name.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ServiceError>;
}

/// `{uuid}_{name}` where `name` is the client file name without any path
/// components.
pub fn stored_file_name(original_name: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize(original_name))
}

fn sanitize(original_name: &str) -> String {
    let base = original_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim_start_matches('.')
        .to_string();
    if cleaned.trim().is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

/// Files on the local disk, one directory for everything.
#[derive(Clone, Debug)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ServiceError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        let name = stored_file_name(original_name);
        let path = self.dir.join(&name);
        fs::write(&path, bytes).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        info!(file = %name, size = bytes.len(), "image stored");
        Ok(name)
    }
}
