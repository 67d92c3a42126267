//! Command modules for appinspectctl
//!
//! - debug_app: kernel identity, lifecycle, directories and bundles

pub mod debug_app;
