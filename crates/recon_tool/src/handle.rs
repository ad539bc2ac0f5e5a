//! Resolved tool handles and version selection.

use recon_core::{ToolName, ToolRef, Version};
use serde::{Deserialize, Serialize};

use crate::client::ToolUnavailable;

/// A resolved tool and the versions the host can run
///
/// Handles carry no mutable state and are consumed by a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolHandle {
    /// Tool name
    pub name: ToolName,
    /// Known versions, in the order the host listed them
    pub versions: Vec<Version>,
}

impl ToolHandle {
    /// Create a handle
    #[must_use]
    pub fn new(name: ToolName, versions: Vec<Version>) -> Self {
        Self { name, versions }
    }

    /// Highest known version
    #[must_use]
    pub fn latest_version(&self) -> Option<Version> {
        self.versions.iter().copied().max()
    }

    /// Whether the host can run `version`
    #[must_use]
    pub fn offers(&self, version: &Version) -> bool {
        self.versions.contains(version)
    }

    /// Plugin reference for a concrete version, e.g. `barbudo/wappalyzer:0.0.2`
    #[must_use]
    pub fn reference(&self, version: Version) -> ToolRef {
        ToolRef::new(self.name.clone(), version)
    }
}

/// Which version of a tool an adapter runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSelection {
    /// Newest version the handle offers
    #[default]
    Latest,
    /// Exactly this version
    Pinned(Version),
}

impl VersionSelection {
    /// Pick a version from a handle
    ///
    /// # Errors
    ///
    /// Returns `ToolUnavailable` if the handle has no versions or does not
    /// offer the pinned one
    pub fn select(&self, handle: &ToolHandle) -> Result<Version, ToolUnavailable> {
        match self {
            Self::Latest => handle
                .latest_version()
                .ok_or_else(|| ToolUnavailable::new(handle.name.clone(), "no versions available")),
            Self::Pinned(version) if handle.offers(version) => Ok(*version),
            Self::Pinned(version) => Err(ToolUnavailable::new(
                handle.name.clone(),
                format!("version {} not offered", version),
            )),
        }
    }
}
