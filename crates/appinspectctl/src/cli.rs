//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// appinspect CLI
#[derive(Parser, Debug)]
#[command(name = "appinspectctl")]
#[command(about = "Inspect a running application kernel", long_about = None)]
#[command(version = env!("APPINSPECT_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the config file (overrides $APPINSPECT_CONFIG and defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the kernel manifest (overrides $APPINSPECT_MANIFEST and config)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Displays application information
    #[command(name = "debug:app")]
    DebugApp {
        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}
