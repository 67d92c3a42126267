//! Kernel handle - read-only view of a running application kernel
//!
//! The reporter never depends on a concrete framework. Hosts adapt their
//! kernel to this trait; `ManifestKernel` is the adapter for hosts that
//! describe themselves through a TOML manifest.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// A loaded module (bundle) of the application
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bundle {
    pub name: String,
    pub path: String,
}

impl Bundle {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Read accessors the reporter needs from a kernel
pub trait KernelHandle {
    /// Type name of the kernel implementation (e.g. `AppKernel`)
    fn class_name(&self) -> &str;

    /// Symbolic kernel name
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    /// End of maintenance, `MM/YYYY`
    fn end_of_maintenance(&self) -> &str;

    /// End of life, `MM/YYYY`
    fn end_of_life(&self) -> &str;

    fn environment(&self) -> &str;

    fn is_debug(&self) -> bool;

    fn charset(&self) -> &str;

    fn root_dir(&self) -> &Path;

    fn cache_dir(&self) -> &Path;

    fn log_dir(&self) -> &Path;

    /// Loaded modules in registration order
    fn bundles(&self) -> Vec<Bundle>;
}
