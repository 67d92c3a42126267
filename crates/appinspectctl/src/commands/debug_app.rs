//! debug:app - displays application information
//!
//! Loads the kernel manifest, builds a report and prints a title, a success
//! banner with the base directory and the report table (or JSON).

use anyhow::{Context, Result};
use appinspect_common::display::{self, report_table};
use appinspect_common::{
    ApplicationReporter, Clock, InspectConfig, KernelHandle, ManifestKernel, Report, SystemClock,
};
use chrono::{DateTime, FixedOffset};
use std::path::Path;
use tracing::{debug, info};

use crate::errors::ConfigError;

/// Title printed above the report
pub const TITLE: &str = "Application Report";

/// Execute `appinspectctl debug:app`
pub fn execute(
    config_path: Option<&Path>,
    manifest_override: Option<&Path>,
    no_color: bool,
    json: bool,
) -> Result<()> {
    let config = InspectConfig::load(config_path).context(ConfigError)?;
    let manifest = config.manifest_path(manifest_override);
    debug!("Using kernel manifest {}", manifest.display());

    let kernel = ManifestKernel::load(&manifest).context("Failed to load application kernel")?;
    let reporter = ApplicationReporter::new(&kernel, SystemClock::new(config.report.timezone))
        .context("Failed to inspect application kernel")?;
    let report = reporter.report();
    info!(
        "Reported {} {} with {} bundles",
        report.class,
        report.version,
        report.bundles.len()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let use_color = !no_color && config.output.color.use_color();
    let base_dir = reporter
        .base_dir()
        .map(str::to_string)
        .unwrap_or_else(|| kernel.root_dir().display().to_string());

    print!(
        "{}",
        render(&report, &base_dir, reporter.clock().now(), use_color)
    );
    Ok(())
}

/// Render the full console output for a report
pub fn render(
    report: &Report,
    base_dir: &str,
    now: DateTime<FixedOffset>,
    use_color: bool,
) -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&display::title(TITLE, use_color));
    output.push('\n');
    output.push_str(&display::success(
        &format!("Application available at: {}", base_dir),
        use_color,
    ));
    output.push('\n');
    output.push_str(&report_table(report, now).render(use_color));
    output
}
