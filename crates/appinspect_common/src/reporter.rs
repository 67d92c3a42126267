//! Application reporter
//!
//! Builds a `Report` snapshot from a kernel handle. The base directory is
//! resolved once at construction; every reported path is made relative to
//! it when it lies below it.

use crate::clock::Clock;
use crate::error::InspectError;
use crate::expiry;
use crate::filesize;
use crate::kernel::KernelHandle;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A bundle as it appears in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleInfo {
    pub name: String,
    pub path: String,
}

/// Snapshot of a kernel's identity, lifecycle, configuration and layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub class: String,
    pub name: String,
    pub version: String,
    pub eom: String,
    pub eom_expired: bool,
    pub eol: String,
    pub eol_expired: bool,
    pub env: String,
    pub debug: bool,
    pub charset: String,
    pub timezone: String,
    pub root_dir: String,
    pub cache_dir: String,
    pub cache_dir_size: String,
    pub log_dir: String,
    pub log_dir_size: String,
    pub bundles: Vec<BundleInfo>,
}

/// Collects report fields from a kernel handle
pub struct ApplicationReporter<'a, K: KernelHandle + ?Sized, C: Clock> {
    kernel: &'a K,
    clock: C,
    base_dir: Option<String>,
}

impl<'a, K: KernelHandle + ?Sized, C: Clock> ApplicationReporter<'a, K, C> {
    /// Create a reporter, resolving the base directory from the kernel root
    pub fn new(kernel: &'a K, clock: C) -> Result<Self, InspectError> {
        let root_dir = kernel.root_dir();
        if root_dir.as_os_str().is_empty() {
            return Err(InspectError::InvalidKernel(
                "kernel root directory is empty".to_string(),
            ));
        }

        let base_dir = paths::base_dir_for(root_dir);
        debug!("Reporter base directory: {:?}", base_dir);

        Ok(Self {
            kernel,
            clock,
            base_dir,
        })
    }

    /// Base directory used to relativize paths, if it could be resolved
    pub fn base_dir(&self) -> Option<&str> {
        self.base_dir.as_deref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Build the full report
    pub fn report(&self) -> Report {
        let now = self.clock.now().naive_local();
        let eom = self.kernel.end_of_maintenance().to_string();
        let eol = self.kernel.end_of_life().to_string();

        Report {
            class: self.kernel.class_name().to_string(),
            name: self.kernel.name().to_string(),
            version: self.kernel.version().to_string(),
            eom_expired: expiry::is_expired(&eom, now),
            eom,
            eol_expired: expiry::is_expired(&eol, now),
            eol,
            env: self.kernel.environment().to_string(),
            debug: self.kernel.is_debug(),
            charset: self.kernel.charset().to_string(),
            timezone: self.clock.timezone(),
            root_dir: self.format_path(self.kernel.root_dir()),
            cache_dir: self.format_path(self.kernel.cache_dir()),
            cache_dir_size: filesize::formatted_size(self.kernel.cache_dir()),
            log_dir: self.format_path(self.kernel.log_dir()),
            log_dir_size: filesize::formatted_size(self.kernel.log_dir()),
            bundles: self.bundles(),
        }
    }

    /// Bundles sorted by name (then path), with relativized paths
    pub fn bundles(&self) -> Vec<BundleInfo> {
        let mut bundles = self.kernel.bundles();
        bundles.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        bundles
            .into_iter()
            .map(|bundle| BundleInfo {
                path: paths::relativize(&bundle.path, self.base_dir()),
                name: bundle.name,
            })
            .collect()
    }

    fn format_path(&self, path: &Path) -> String {
        paths::relativize(&path.to_string_lossy(), self.base_dir())
    }
}
