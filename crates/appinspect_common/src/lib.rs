//! appinspect common - kernel inspection and application reports
//!
//! The reporter reads a `KernelHandle`, normalizes paths against the
//! application base directory, sizes the cache and log directories and
//! checks the lifecycle dates. Renderers only consume the resulting `Report`.

pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod expiry;
pub mod filesize;
pub mod kernel;
pub mod manifest;
pub mod paths;
pub mod reporter;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ColorMode, InspectConfig, TimezoneMode};
pub use error::InspectError;
pub use kernel::{Bundle, KernelHandle};
pub use manifest::ManifestKernel;
pub use reporter::{ApplicationReporter, BundleInfo, Report};

/// Version embedded into binaries and the web page
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
