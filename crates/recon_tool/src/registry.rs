//! In-process tool registry.
//!
//! Hosts that keep their tool catalogue in memory use this to answer
//! `resolve`.

use indexmap::IndexMap;
use recon_core::ToolName;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use crate::client::ToolUnavailable;
use crate::handle::ToolHandle;

/// Error from registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Tool already registered
    #[error("Tool already registered: {name}")]
    AlreadyRegistered {
        /// Tool name
        name: ToolName,
    },
}

/// Registry of tool handles keyed by name, in registration order
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: IndexMap<ToolName, ToolHandle>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns error if a tool with the same name is already registered
    pub fn register(&mut self, handle: ToolHandle) -> Result<(), RegistryError> {
        if self.tools.contains_key(&handle.name) {
            return Err(RegistryError::AlreadyRegistered { name: handle.name });
        }
        self.tools.insert(handle.name.clone(), handle);
        Ok(())
    }

    /// Resolve a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ToolUnavailable` if the tool is unknown
    pub fn resolve(&self, name: &ToolName) -> Result<ToolHandle, ToolUnavailable> {
        self.tools
            .get(name)
            .cloned()
            .ok_or_else(|| ToolUnavailable::new(name.clone(), "tool is not registered"))
    }

    /// Registered tool names
    #[must_use]
    pub fn list(&self) -> Vec<ToolName> {
        self.tools.keys().cloned().collect()
    }
}

/// Thread-safe registry for concurrent resolution
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: RwLock<ToolRegistry>,
}

impl SharedRegistry {
    /// Create a new shared registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns error if tool already registered
    pub fn register(&self, handle: ToolHandle) -> Result<(), RegistryError> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(handle)
    }

    /// Resolve a tool by name
    ///
    /// # Errors
    ///
    /// Returns `ToolUnavailable` if the tool is unknown
    pub fn resolve(&self, name: &ToolName) -> Result<ToolHandle, ToolUnavailable> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .resolve(name)
    }

    /// Registered tool names
    #[must_use]
    pub fn list(&self) -> Vec<ToolName> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).list()
    }
}

impl From<ToolRegistry> for SharedRegistry {
    fn from(registry: ToolRegistry) -> Self {
        Self {
            inner: RwLock::new(registry),
        }
    }
}
