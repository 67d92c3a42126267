//! HTTP server for appinspectd

use crate::routes;
use anyhow::{Context, Result};
use appinspect_common::TimezoneMode;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    /// Kernel manifest, re-read on every request
    pub manifest: PathBuf,
    pub timezone: TimezoneMode,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(manifest: PathBuf, timezone: TimezoneMode) -> Self {
        Self {
            manifest,
            timezone,
            start_time: Instant::now(),
        }
    }
}

/// Build the router with all routes
pub fn router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::report_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl-C
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Listening on http://{}", bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
