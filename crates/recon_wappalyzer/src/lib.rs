//! RECON Wappalyzer Adapter
//!
//! Runs the `barbudo/wappalyzer` fingerprinting tool against a target URL
//! and reports the detected technologies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod schema;

pub use schema::{WappalyzerItem, WappalyzerOutput, parse_output};

use recon_core::ToolName;
use recon_tool::{Adapter, TargetSpec};

/// Registry name of the tool
pub const TOOL_NAME: &str = "barbudo/wappalyzer";

/// Tool name as a validated [`ToolName`]
#[must_use]
pub fn tool_name() -> ToolName {
    ToolName::from_static(TOOL_NAME)
}

/// Wappalyzer takes the target URL as its only argument
fn target_url(target: &TargetSpec) -> String {
    target.target.clone()
}

/// Adapter for the latest Wappalyzer release the host offers
#[must_use]
pub fn adapter() -> Adapter<WappalyzerItem> {
    Adapter::new(tool_name(), parse_output).with_args(target_url)
}
