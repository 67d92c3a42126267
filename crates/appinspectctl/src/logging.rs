//! Logging setup for appinspectctl
//!
//! Diagnostics go to stderr so `--json` output on stdout stays parseable.
//! Filter: $APPINSPECT_LOG, default `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "APPINSPECT_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // try_init: tests may install a subscriber first
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
