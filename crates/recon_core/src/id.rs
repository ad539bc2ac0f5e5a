//! Unique identifiers for RECON invocations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

/// Scan identifier - correlates every client call made by one adapter invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScanId(Uuid);

impl ScanId {
    const PREFIX: &'static str = "scan_";

    /// Create a new random ScanId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Get as UUID
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ScanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ScanId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix(Self::PREFIX).unwrap_or(s);
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|e| CoreError::InvalidId {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_id_unique() {
        assert_ne!(ScanId::new(), ScanId::new());
    }

    #[test]
    fn test_scan_id_display_parse() {
        let id = ScanId::from_bytes([7u8; 16]);
        let text = id.to_string();
        assert!(text.starts_with("scan_"));
        assert_eq!(text.parse::<ScanId>().unwrap(), id);
    }

    #[test]
    fn test_scan_id_parse_without_prefix() {
        let id = ScanId::new();
        let parsed: ScanId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_scan_id_parse_invalid() {
        assert!("scan_nope".parse::<ScanId>().is_err());
    }
}
