//! RECON Reports
//!
//! Platform-neutral findings and the tagged report delivered to the
//! reporting sink. Every tool adapter normalizes into these types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod finding;
pub mod normalize;
pub mod report;

pub use category::{Category, CategoryError};
pub use finding::Finding;
pub use normalize::normalize;
pub use report::{Findings, Report, ReportError, ReportKind};
