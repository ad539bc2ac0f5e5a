//! CLI configuration.
//!
//! Read from a TOML file. Every section is optional; a missing file path
//! means built-in defaults.

use recon_core::{ToolName, Version};
use recon_tool::{RegistryError, SharedRegistry, ToolHandle, ToolRegistry, VersionSelection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "RECON_CONFIG";

/// Error loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// File is not valid TOML for this schema
    #[error("Invalid config {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Registry section is inconsistent
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconConfig {
    /// Tools the local host can resolve
    pub registry: Vec<ToolEntry>,
    /// Wappalyzer adapter settings
    pub wappalyzer: AdapterConfig,
    /// Logging settings
    pub log: LogConfig,
}

/// One registry entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Tool name
    pub name: ToolName,
    /// Versions the host can run
    pub versions: Vec<Version>,
}

/// Per-adapter settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Version to run
    pub version: VersionSelection,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, overridden by `RECON_LOG`
    pub filter: String,
    /// Emit JSON lines instead of human-readable logs
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "recon=info".to_string(),
            json: false,
        }
    }
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            registry: vec![ToolEntry {
                name: recon_wappalyzer::tool_name(),
                versions: vec![Version::new(0, 0, 2)],
            }],
            wappalyzer: AdapterConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl ReconConfig {
    /// Load from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, otherwise use defaults
    ///
    /// # Errors
    ///
    /// Returns error if a given file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Build the registry described by the config
    ///
    /// # Errors
    ///
    /// Returns error if a tool is listed twice
    pub fn build_registry(&self) -> Result<SharedRegistry, ConfigError> {
        let mut registry = ToolRegistry::new();
        for entry in &self.registry {
            registry.register(ToolHandle::new(entry.name.clone(), entry.versions.clone()))?;
        }
        Ok(registry.into())
    }
}
