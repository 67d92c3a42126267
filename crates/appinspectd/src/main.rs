//! appinspectd - serves application reports over HTTP

use anyhow::{Context, Result};
use appinspect_common::InspectConfig;
use appinspectd::server::{self, AppState};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "appinspectd")]
#[command(about = "Serve application reports over HTTP", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the kernel manifest
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Listen address (overrides [server] bind)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("APPINSPECT_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("appinspectd v{} starting", env!("CARGO_PKG_VERSION"));

    let config = InspectConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let manifest = config.manifest_path(args.manifest.as_deref());
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    info!("Reporting on kernel manifest {}", manifest.display());

    let state = AppState::new(manifest, config.report.timezone);
    server::run(state, &bind).await
}
