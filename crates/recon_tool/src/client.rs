//! Host client capabilities.
//!
//! An adapter never talks to the platform directly. Everything it needs
//! from the host runtime goes through the three operations of
//! [`HostClient`], which makes the whole pipeline testable against a
//! double.

use async_trait::async_trait;
use recon_core::{ScanId, ToolName, Version};
use recon_report::Report;
use thiserror::Error;

use crate::handle::ToolHandle;
use crate::output::RawOutput;

/// Boxed error from a host collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Per-invocation context passed to every client call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    /// Correlates all calls made for one target
    pub scan_id: ScanId,
}

impl InvocationContext {
    /// Context with a fresh scan id
    #[must_use]
    pub fn new() -> Self {
        Self {
            scan_id: ScanId::new(),
        }
    }

    /// Context for an existing scan
    #[must_use]
    pub fn for_scan(scan_id: ScanId) -> Self {
        Self { scan_id }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The named tool cannot be resolved to a runnable handle
///
/// Absence of a declared dependency is not transient; callers should not
/// retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Tool unavailable: {name}: {reason}")]
pub struct ToolUnavailable {
    /// Requested tool
    pub name: ToolName,
    /// Why resolution failed
    pub reason: String,
}

impl ToolUnavailable {
    /// Create a new error
    #[must_use]
    pub fn new(name: ToolName, reason: impl Into<String>) -> Self {
        Self {
            name,
            reason: reason.into(),
        }
    }
}

/// Running the tool failed
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvocationError {
    /// What went wrong
    pub message: String,
    /// Underlying execution error, if the host has one
    #[source]
    pub source: Option<BoxError>,
}

impl InvocationError {
    /// Error with a message only
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Error wrapping an underlying cause
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// The sink rejected or failed to store the report
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DeliveryError {
    /// What went wrong
    pub message: String,
    /// Underlying transport or sink error
    #[source]
    pub source: Option<BoxError>,
}

impl DeliveryError {
    /// Error with a message only
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Error wrapping an underlying cause
    #[must_use]
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Capabilities the host runtime grants an adapter
///
/// Implementations must be safe to share between concurrent invocations.
#[async_trait]
pub trait HostClient: Send + Sync {
    /// Resolve a tool name to a handle
    async fn resolve(
        &self,
        ctx: &InvocationContext,
        name: &ToolName,
    ) -> Result<ToolHandle, ToolUnavailable>;

    /// Run a resolved tool and wait for it to finish
    async fn invoke(
        &self,
        ctx: &InvocationContext,
        handle: ToolHandle,
        version: Version,
        args: String,
    ) -> Result<RawOutput, InvocationError>;

    /// Deliver a finished report to the orchestrator
    async fn deliver(&self, ctx: &InvocationContext, report: &Report) -> Result<(), DeliveryError>;
}
