//! Tool versions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic version of an external tool
///
/// Serialized as its `major.minor.patch` string so handles and plugin
/// references read the same way the host writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    /// Major component
    pub major: u64,
    /// Minor component
    pub minor: u64,
    /// Patch component
    pub patch: u64,
}

impl Version {
    /// Create a new version
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse from string
    ///
    /// # Errors
    ///
    /// Returns error if format is invalid
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::InvalidFormat(s.to_string()));
        }

        let component = |part: &str| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::InvalidComponent(part.to_string()));
            }
            part.parse::<u64>()
                .map_err(|_| VersionError::InvalidComponent(part.to_string()))
        };

        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            patch: component(parts[2])?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Version-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Invalid format
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),
    /// Invalid component
    #[error("Invalid version component: {0}")]
    InvalidComponent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("0.0.2").unwrap();
        assert_eq!(v, Version::new(0, 0, 2));
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(format!("{}", v), "1.2.3");
    }

    #[test]
    fn test_version_ord() {
        let v1 = Version::new(0, 0, 2);
        let v2 = Version::new(0, 0, 10);
        let v3 = Version::new(0, 1, 0);

        assert!(v1 < v2);
        assert!(v2 < v3);
        assert_eq!([v2, v3, v1].into_iter().max(), Some(v3));
    }

    #[test]
    fn test_version_parse_error() {
        let result = Version::parse("1.2");
        assert!(matches!(result, Err(VersionError::InvalidFormat(_))));

        let result = Version::parse("a.b.c");
        assert!(matches!(result, Err(VersionError::InvalidComponent(_))));

        let result = Version::parse("1.-2.3");
        assert!(matches!(result, Err(VersionError::InvalidComponent(_))));
    }

    #[test]
    fn test_version_parse_rejects_signs_and_blanks() {
        for bad in ["+1.0.0", "1.+2.3", "1..3", " 1.0.0", "1.0.0 "] {
            assert!(
                matches!(Version::parse(bad), Err(VersionError::InvalidComponent(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_version_serde_as_string() {
        let v = Version::new(0, 0, 2);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"0.0.2\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<Version>("\"latest\"").is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_display_parses_back(major: u64, minor: u64, patch: u64) {
            let v = Version::new(major, minor, patch);
            proptest::prop_assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
        }
    }
}
