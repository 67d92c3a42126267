//! appinspect configuration
//!
//! Config file: ~/.config/appinspect/config.toml or /etc/appinspect/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "APPINSPECT_CONFIG";

/// Environment variable pointing at the kernel manifest
pub const MANIFEST_ENV: &str = "APPINSPECT_MANIFEST";

/// Default manifest file name, looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "app.toml";

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal that supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current terminal
    pub fn use_color(self) -> bool {
        match self {
            ColorMode::Auto => console::colors_enabled(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Timezone the report dates are evaluated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneMode {
    #[default]
    Utc,
    Local,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Report configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Kernel manifest path
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    #[serde(default)]
    pub timezone: TimezoneMode,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:7870".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Main appinspect configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl InspectConfig {
    /// Get default user config path: ~/.config/appinspect/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("appinspect").join("config.toml"));
        }

        std::env::var("HOME").ok().map(|home| {
            Path::new(&home)
                .join(".config")
                .join("appinspect")
                .join("config.toml")
        })
    }

    /// Get system config path: /etc/appinspect/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/appinspect/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (`--config`)
    /// 2. $APPINSPECT_CONFIG
    /// 3. User config (~/.config/appinspect/config.toml)
    /// 4. System config (/etc/appinspect/config.toml)
    /// 5. Defaults
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: InspectConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the kernel manifest path
    ///
    /// Priority: command-line override, $APPINSPECT_MANIFEST, config file,
    /// `./app.toml`.
    pub fn manifest_path(&self, cli_override: Option<&Path>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }

        if let Ok(path) = std::env::var(MANIFEST_ENV) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }

        self.report
            .manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST))
    }
}
