//! Path helpers for application reports

use std::path::Path;
use tracing::debug;

/// Compute the application base directory: the canonical parent of the
/// kernel root directory.
///
/// Returns `None` when the root directory cannot be resolved (for example
/// when it does not exist), in which case paths are reported unchanged.
pub fn base_dir_for(root_dir: &Path) -> Option<String> {
    match root_dir.join("..").canonicalize() {
        Ok(base) => Some(base.to_string_lossy().into_owned()),
        Err(e) => {
            debug!("Cannot resolve base directory of {}: {}", root_dir.display(), e);
            None
        }
    }
}

/// Replace a leading `base_dir` with `.`
///
/// Plain string prefix match: `..` and symlinks in `path` are not resolved.
pub fn relativize(path: &str, base_dir: Option<&str>) -> String {
    match base_dir {
        Some(base) if !base.is_empty() => match path.strip_prefix(base) {
            Some(rest) => format!(".{}", rest),
            None => path.to_string(),
        },
        _ => path.to_string(),
    }
}
