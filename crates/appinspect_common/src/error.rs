//! Error types for appinspect.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Kernel unavailable: cannot read manifest {}: {source}", path.display())]
    KernelUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid kernel manifest {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Invalid kernel: {0}")]
    InvalidKernel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InspectError {
    /// True when the error means no usable kernel handle could be obtained
    pub fn is_kernel_failure(&self) -> bool {
        matches!(
            self,
            InspectError::KernelUnavailable { .. }
                | InspectError::InvalidManifest { .. }
                | InspectError::InvalidKernel(_)
        )
    }
}
