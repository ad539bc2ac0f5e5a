//! Core error types for RECON.

use thiserror::Error;

use crate::version::VersionError;

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Invalid tool name
    #[error("Invalid tool name {name:?}: {reason}")]
    InvalidToolName {
        /// Rejected input
        name: String,
        /// Validation failure
        reason: String,
    },

    /// Invalid tool reference (`namespace/tool:version`)
    #[error("Invalid tool reference {reference:?}: {reason}")]
    InvalidToolRef {
        /// Rejected input
        reference: String,
        /// Validation failure
        reason: String,
    },

    /// Invalid version
    #[error(transparent)]
    InvalidVersion(#[from] VersionError),

    /// Invalid ID format
    #[error("Invalid ID: {reason}")]
    InvalidId {
        /// Validation failure
        reason: String,
    },
}
