use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::HttpEmployeeUpstream;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the reqwest adapter from configuration into the router.
pub fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let upstream = HttpEmployeeUpstream::new(&cfg.upstream)
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    info!(upstream = %upstream.collection_url(), "employee upstream configured");
    let state = AppState::new(Arc::new(upstream));
    Ok(routes::build_router(state, build_cors()))
}

/// Bind the configured address and serve until the listener fails.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg)?;
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!(%addr, "starting employee api");
    axum::serve(listener, app).await?;
    Ok(())
}
