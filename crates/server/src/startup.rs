use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, RouterConfig};
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when present, environment otherwise.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Build the router for a ready state and config.
pub fn build_app(state: ServerState, cfg: &AppConfig) -> Router {
    routes::build_router(
        state,
        build_cors(),
        RouterConfig { upload_dir: Path::new(&cfg.uploads.dir), max_body_bytes: cfg.uploads.max_body_bytes },
    )
}

/// Public entry: connect, migrate, then serve until the task is dropped
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    common::env::ensure_upload_dir(&cfg.uploads.dir)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;
    info!(service = "server", event = "db_ready", "database connected and migrated");

    let state = ServerState::connect(db, &cfg);
    let app = build_app(state, &cfg);

    let addr = bind_addr(&cfg)?;
    info!(service = "server", event = "listening", %addr, "starting http server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_bad_host() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[test]
    fn bind_addr_uses_configured_port() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 9090;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 9090);
    }
}
