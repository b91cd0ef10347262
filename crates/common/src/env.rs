//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the upload directory exists, creating it when missing.
pub async fn ensure_upload_dir(upload_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(upload_dir).await.is_err() {
        warn!(%upload_dir, "upload directory not found; creating it");
    }
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {upload_dir}: {e}"))?;
    info!(%upload_dir, "upload directory ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_nested_upload_dir() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join(format!("backoffice-env-{}", std::process::id())).join("nested");
        let dir_str = dir.to_string_lossy().to_string();
        ensure_upload_dir(&dir_str).await?;
        assert!(tokio::fs::metadata(&dir).await?.is_dir());
        // second call is a no-op
        ensure_upload_dir(&dir_str).await?;
        Ok(())
    }
}
