//! Wappalyzer output schema.
//!
//! The tool prints one JSON object with an `applications` list. Every item
//! field is required; fields added by newer tool releases are ignored.

use recon_report::{Category, Finding};
use recon_tool::{ParseError, decode_json};
use serde::{Deserialize, Serialize};

/// Top-level document printed by the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WappalyzerOutput {
    /// Detected applications in the order the tool found them
    pub applications: Vec<WappalyzerItem>,
}

/// One detected application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WappalyzerItem {
    /// Application name
    pub name: String,
    /// Version, empty when unknown
    pub version: String,
    /// Confidence as printed by the tool, usually 0 to 100
    pub confidence: i64,
    /// Category slugs
    pub categories: Vec<Category>,
}

impl From<WappalyzerItem> for Finding {
    fn from(item: WappalyzerItem) -> Self {
        Finding::new(item.name, item.version, item.confidence).with_categories(item.categories)
    }
}

/// Decode Wappalyzer's raw output, keeping item order
///
/// # Errors
///
/// Returns `ParseError::Json` for malformed JSON or a missing/mistyped
/// field
pub fn parse_output(raw: &str) -> Result<Vec<WappalyzerItem>, ParseError> {
    let output: WappalyzerOutput = decode_json(raw)?;
    Ok(output.applications)
}
