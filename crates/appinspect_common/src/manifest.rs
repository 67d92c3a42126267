//! Manifest-backed kernel
//!
//! Hosts that cannot implement `KernelHandle` in-process describe their
//! kernel in a TOML file:
//!
//! ```toml
//! class = "AppKernel"
//! version = "3.4.2"
//! end_of_maintenance = "11/2020"
//! end_of_life = "11/2021"
//! environment = "prod"
//! debug = false
//! root_dir = "app"
//!
//! [[bundles]]
//! name = "FrameworkBundle"
//! path = "vendor/framework-bundle"
//! ```
//!
//! Relative paths are resolved against the manifest's canonical directory.

use crate::error::InspectError;
use crate::kernel::{Bundle, KernelHandle};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default = "default_class")]
    class: String,
    name: Option<String>,
    version: String,
    end_of_maintenance: String,
    end_of_life: String,
    #[serde(default = "default_environment")]
    environment: String,
    #[serde(default = "default_debug")]
    debug: bool,
    #[serde(default = "default_charset")]
    charset: String,
    root_dir: PathBuf,
    cache_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    #[serde(default)]
    bundles: Vec<RawBundle>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBundle {
    name: String,
    path: PathBuf,
}

fn default_class() -> String {
    "AppKernel".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_debug() -> bool {
    true
}

fn default_charset() -> String {
    "UTF-8".to_string()
}

/// Kernel described by a manifest file
#[derive(Debug, Clone)]
pub struct ManifestKernel {
    class: String,
    name: String,
    version: String,
    end_of_maintenance: String,
    end_of_life: String,
    environment: String,
    debug: bool,
    charset: String,
    root_dir: PathBuf,
    cache_dir: PathBuf,
    log_dir: PathBuf,
    bundles: Vec<Bundle>,
}

impl ManifestKernel {
    /// Load a kernel manifest
    ///
    /// A manifest that cannot be read means the kernel is unavailable; one
    /// that cannot be parsed means the kernel is invalid.
    pub fn load(path: &Path) -> Result<Self, InspectError> {
        let contents = fs::read_to_string(path).map_err(|source| InspectError::KernelUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        // Resolve symlinks and relative components so kernel paths share the
        // canonical prefix of the reporter's base directory.
        let resolved = fs::canonicalize(path).map_err(|source| InspectError::KernelUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let anchor = resolved.parent().unwrap_or_else(|| Path::new("/"));

        let kernel = Self::parse(&contents, anchor).map_err(|message| {
            InspectError::InvalidManifest {
                path: path.to_path_buf(),
                message,
            }
        })?;

        debug!(
            "Loaded kernel {} ({} bundles) from {}",
            kernel.class,
            kernel.bundles.len(),
            path.display()
        );
        Ok(kernel)
    }

    /// Parse manifest contents, resolving relative paths against `anchor`
    pub fn parse(contents: &str, anchor: &Path) -> Result<Self, String> {
        let raw: RawManifest = toml::from_str(contents).map_err(|e| e.to_string())?;

        if raw.root_dir.as_os_str().is_empty() {
            return Err("root_dir must not be empty".to_string());
        }

        let root_dir = resolve(anchor, &raw.root_dir);
        let cache_dir = raw
            .cache_dir
            .map(|p| resolve(anchor, &p))
            .unwrap_or_else(|| root_dir.join("cache").join(&raw.environment));
        let log_dir = raw
            .log_dir
            .map(|p| resolve(anchor, &p))
            .unwrap_or_else(|| root_dir.join("logs"));
        let name = raw.name.unwrap_or_else(|| {
            root_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let bundles = raw
            .bundles
            .into_iter()
            .map(|b| Bundle::new(b.name, resolve(anchor, &b.path).to_string_lossy()))
            .collect();

        Ok(Self {
            class: raw.class,
            name,
            version: raw.version,
            end_of_maintenance: raw.end_of_maintenance,
            end_of_life: raw.end_of_life,
            environment: raw.environment,
            debug: raw.debug,
            charset: raw.charset,
            root_dir,
            cache_dir,
            log_dir,
            bundles,
        })
    }
}

fn resolve(anchor: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        anchor.join(path)
    }
}

impl KernelHandle for ManifestKernel {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn end_of_maintenance(&self) -> &str {
        &self.end_of_maintenance
    }

    fn end_of_life(&self) -> &str {
        &self.end_of_life
    }

    fn environment(&self) -> &str {
        &self.environment
    }

    fn is_debug(&self) -> bool {
        self.debug
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    fn bundles(&self) -> Vec<Bundle> {
        self.bundles.clone()
    }
}
