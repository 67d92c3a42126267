//! Router tests for appinspectd
//!
//! Drives the router in-process with `oneshot`, no socket involved.

use appinspect_common::TimezoneMode;
use appinspectd::server::{router, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

fn app_fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let project = dir.path().to_path_buf();
    fs::create_dir_all(project.join("app/logs")).unwrap();
    fs::write(project.join("app/logs/prod.log"), vec![b'l'; 1536]).unwrap();

    let manifest = project.join("app.toml");
    fs::write(
        &manifest,
        r#"
class = "ShopKernel"
version = "3.4.2"
end_of_maintenance = "11/2020"
end_of_life = "11/2999"
environment = "prod"
debug = false
root_dir = "app"

[[bundles]]
name = "Acme<Bundle>"
path = "src/acme"
"#,
    )
    .unwrap();

    (dir, manifest)
}

async fn get(manifest: PathBuf, uri: &str) -> (StatusCode, String) {
    let app = router(AppState::new(manifest, TimezoneMode::Utc));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn report_json_route() {
    let (_dir, manifest) = app_fixture();
    let (status, body) = get(manifest, "/v1/report").await;

    assert_eq!(status, StatusCode::OK);
    let report: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(report["class"], "ShopKernel");
    assert_eq!(report["timezone"], "UTC");
    assert_eq!(report["root_dir"], "./app");
    assert_eq!(report["log_dir"], "./app/logs");
    assert_eq!(report["log_dir_size"], "1.50kB");
    assert_eq!(report["bundles"][0]["path"], "./src/acme");
}

#[tokio::test]
async fn report_page_route() {
    let (dir, manifest) = app_fixture();
    let (status, body) = get(manifest, "/").await;

    assert_eq!(status, StatusCode::OK);
    let base = dir.path().canonicalize().unwrap();
    assert!(body.starts_with("<!doctype html>"));
    assert!(body.contains(&format!("Application available at: {}", base.display())));
    assert!(body.contains("<th>Kernel</th><td>ShopKernel</td>"));
    assert!(body.contains("<span class=\"error\">Expired</span>"));
    assert!(body.contains("Acme&lt;Bundle&gt;"));
    assert!(!body.contains("Acme<Bundle>"));
}

#[tokio::test]
async fn missing_manifest_is_service_unavailable() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(dir.path().join("app.toml"), "/v1/report").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("Kernel unavailable"));
}

#[tokio::test]
async fn health_route() {
    let dir = TempDir::new().unwrap();
    let (status, body) = get(dir.path().join("app.toml"), "/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert!(health["version"].is_string());
}
