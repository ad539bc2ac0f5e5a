//! RECON Core Types
//!
//! Pure identifier and version types shared by every adapter crate.
//! Nothing in here performs I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod name;
pub mod version;

// Re-exports
pub use error::{CoreError, CoreResult};
pub use id::ScanId;
pub use name::{ToolName, ToolRef};
pub use version::{Version, VersionError};
