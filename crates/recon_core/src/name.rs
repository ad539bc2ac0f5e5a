//! Tool names and plugin references.
//!
//! A tool is addressed as `namespace/tool`, optionally pinned to a version
//! with `namespace/tool:1.2.3`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};
use crate::version::Version;

/// Stable identifier of an external tool, e.g. `barbudo/wappalyzer`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName(String);

impl ToolName {
    /// Validate and wrap a tool name
    ///
    /// # Errors
    ///
    /// Returns error unless the name is `namespace/tool` with non-empty
    /// segments made of ASCII alphanumerics, `-`, `_` or `.`
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Wrap a name known at compile time
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid tool name
    #[must_use]
    pub fn from_static(name: &'static str) -> Self {
        if let Err(err) = Self::validate(name) {
            panic!("{err}");
        }
        Self(name.to_string())
    }

    fn validate(name: &str) -> CoreResult<()> {
        let invalid = |reason: &str| CoreError::InvalidToolName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("must not be empty"));
        }
        let Some((namespace, tool)) = name.split_once('/') else {
            return Err(invalid("expected namespace/tool"));
        };
        for segment in [namespace, tool] {
            if segment.is_empty() {
                return Err(invalid("empty segment"));
            }
            if !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            {
                return Err(invalid("unexpected character"));
            }
        }
        Ok(())
    }

    /// Namespace segment
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.0.split_once('/').map_or("", |(ns, _)| ns)
    }

    /// Tool segment
    #[must_use]
    pub fn tool(&self) -> &str {
        self.0.split_once('/').map_or("", |(_, tool)| tool)
    }

    /// Full name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ToolName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ToolName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.0
    }
}

/// Reference to a tool as written in a workflow step, e.g.
/// `barbudo/wappalyzer:0.0.2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolRef {
    /// Tool name
    pub name: ToolName,
    /// Pinned version, `None` for whatever the host considers latest
    pub version: Option<Version>,
}

impl ToolRef {
    /// Reference to a specific version
    #[must_use]
    pub fn new(name: ToolName, version: Version) -> Self {
        Self {
            name,
            version: Some(version),
        }
    }

    /// Reference without a pinned version
    #[must_use]
    pub fn unpinned(name: ToolName) -> Self {
        Self {
            name,
            version: None,
        }
    }

    /// Parse `namespace/tool[:version]`
    ///
    /// # Errors
    ///
    /// Returns error if the name or version part is invalid
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.split_once(':') {
            None => Ok(Self::unpinned(ToolName::new(s)?)),
            Some((name, version)) => {
                let version = Version::parse(version).map_err(|e| CoreError::InvalidToolRef {
                    reference: s.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(Self::new(ToolName::new(name)?, version))
            }
        }
    }
}

impl fmt::Display for ToolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for ToolRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
