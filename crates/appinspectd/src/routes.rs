//! API routes for appinspectd
//!
//! - GET /           report page (HTML)
//! - GET /v1/report  report (JSON)
//! - GET /v1/health  liveness

use crate::page;
use crate::server::AppState;
use appinspect_common::{
    ApplicationReporter, Clock, InspectError, KernelHandle, ManifestKernel, Report, SystemClock,
    TimezoneMode, VERSION,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

type AppStateArc = Arc<AppState>;

/// A freshly built report with what the page needs around it
pub struct Snapshot {
    pub report: Report,
    pub base_dir: String,
    pub now: DateTime<FixedOffset>,
}

// ============================================================================
// Report Routes
// ============================================================================

pub fn report_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(report_page))
        .route("/v1/report", get(report_json))
}

async fn report_page(
    State(state): State<AppStateArc>,
) -> Result<Html<String>, (StatusCode, String)> {
    let snapshot = build_snapshot(&state).await?;
    Ok(Html(page::render(&snapshot)))
}

async fn report_json(
    State(state): State<AppStateArc>,
) -> Result<Json<Report>, (StatusCode, String)> {
    let snapshot = build_snapshot(&state).await?;
    Ok(Json(snapshot.report))
}

/// Build a report off the async runtime; directory sizing walks the disk
async fn build_snapshot(state: &AppState) -> Result<Snapshot, (StatusCode, String)> {
    let manifest = state.manifest.clone();
    let timezone = state.timezone;

    let result = tokio::task::spawn_blocking(move || snapshot_blocking(manifest, timezone))
        .await
        .map_err(|e| {
            error!("Report task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    result.map_err(|e| {
        error!("Cannot build report: {}", e);
        let status = if e.is_kernel_failure() {
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, e.to_string())
    })
}

fn snapshot_blocking(manifest: PathBuf, timezone: TimezoneMode) -> Result<Snapshot, InspectError> {
    let kernel = ManifestKernel::load(&manifest)?;
    let reporter = ApplicationReporter::new(&kernel, SystemClock::new(timezone))?;
    let report = reporter.report();
    info!("Built report for {} ({} bundles)", report.class, report.bundles.len());

    let base_dir = reporter
        .base_dir()
        .map(str::to_string)
        .unwrap_or_else(|| kernel.root_dir().display().to_string());

    Ok(Snapshot {
        now: reporter.clock().now(),
        base_dir,
        report,
    })
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
