//! Directory sizing
//!
//! Sizes are best effort: entries that cannot be read contribute nothing and
//! never fail the report.

use std::fs;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

const UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Total size in bytes of a file, or of all regular files below a directory
///
/// Symbolic links are followed. Missing paths size to 0.
pub fn path_size(path: &Path) -> u64 {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => meta.len(),
        Ok(meta) if meta.is_dir() => directory_size(path),
        Ok(_) => 0,
        Err(e) => {
            debug!("Skipping size of {}: {}", path.display(), e);
            0
        }
    }
}

fn directory_size(path: &Path) -> u64 {
    let mut total = 0u64;

    for entry in WalkDir::new(path).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", path.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(meta) => total = total.saturating_add(meta.len()),
            Err(e) => debug!("Skipping {}: {}", entry.path().display(), e),
        }
    }

    total
}

/// Format a byte count with binary-prefix units and two decimals
///
/// 0 -> `0.00B`, 1536 -> `1.50kB`, 1048576 -> `1.00MB`
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2}{}", size, UNITS[unit])
}

/// Size a path and format the result
pub fn formatted_size(path: &Path) -> String {
    format_size(path_size(path))
}
