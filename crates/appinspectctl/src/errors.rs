//! Exit codes for appinspectctl

use appinspect_common::InspectError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the kernel handle is unavailable or invalid
pub const EXIT_KERNEL_UNAVAILABLE: i32 = 70;

/// Exit code when configuration cannot be loaded
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Marker attached to configuration failures so `main` can pick the exit code
#[derive(Debug)]
pub struct ConfigError;

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("configuration error")
    }
}

impl std::error::Error for ConfigError {}

/// Map a command failure to a process exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let kernel_failure = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<InspectError>())
        .any(InspectError::is_kernel_failure);

    if kernel_failure {
        EXIT_KERNEL_UNAVAILABLE
    } else if err.downcast_ref::<ConfigError>().is_some() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn test_kernel_failure_exit_code() {
        let err = Err::<(), _>(InspectError::InvalidKernel("empty root".to_string()))
            .context("Failed to build report")
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_KERNEL_UNAVAILABLE);

        let err = anyhow::Error::new(InspectError::KernelUnavailable {
            path: PathBuf::from("app.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(exit_code(&err), EXIT_KERNEL_UNAVAILABLE);
    }

    #[test]
    fn test_config_exit_code() {
        let err = anyhow::anyhow!("bad toml").context(ConfigError);
        assert_eq!(exit_code(&err), EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_general_exit_code() {
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), EXIT_GENERAL_ERROR);
    }
}
