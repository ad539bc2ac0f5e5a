//! Raw tool output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content kind of a tool's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    /// Unparsed text as printed by the tool
    Raw,
    /// The tool produced nothing
    Empty,
    /// Already-structured data
    Structured,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Empty => write!(f, "empty"),
            Self::Structured => write!(f, "structured"),
        }
    }
}

/// Output returned by the host after running a tool
///
/// Only `Raw` output can be handed to a parser. Adapters must check the
/// kind and refuse anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "kebab-case")]
pub enum RawOutput {
    /// Tool stdout
    Raw(String),
    /// No output
    Empty,
    /// Structured payload produced by the host
    Structured(serde_json::Value),
}

impl RawOutput {
    /// Kind of this output
    #[must_use]
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Raw(_) => OutputKind::Raw,
            Self::Empty => OutputKind::Empty,
            Self::Structured(_) => OutputKind::Structured,
        }
    }

    /// Take the raw text, or give the output back if it is another kind
    ///
    /// # Errors
    ///
    /// Returns the output unchanged when it is not `Raw`
    pub fn into_raw(self) -> Result<String, Self> {
        match self {
            Self::Raw(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl From<String> for RawOutput {
    fn from(text: String) -> Self {
        Self::Raw(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind() {
        assert_eq!(RawOutput::Raw("[]".to_string()).kind(), OutputKind::Raw);
        assert_eq!(RawOutput::Empty.kind(), OutputKind::Empty);
        assert_eq!(RawOutput::Structured(json!({})).kind(), OutputKind::Structured);
    }

    #[test]
    fn test_into_raw() {
        assert_eq!(RawOutput::from("x".to_string()).into_raw(), Ok("x".to_string()));
        assert_eq!(RawOutput::Empty.into_raw(), Err(RawOutput::Empty));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(RawOutput::Raw("{}".to_string())).unwrap();
        assert_eq!(json, json!({"kind": "raw", "data": "{}"}));

        let empty: RawOutput = serde_json::from_value(json!({"kind": "empty"})).unwrap();
        assert_eq!(empty, RawOutput::Empty);
    }
}
