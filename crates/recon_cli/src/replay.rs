//! Invoker that replays captured tool output from disk.

use async_trait::async_trait;
use recon_core::Version;
use recon_tool::{InvocationContext, InvocationError, RawOutput, ToolHandle, ToolInvoker};
use std::path::PathBuf;

/// Returns the contents of one file for every invocation
///
/// A file holding only whitespace replays as [`RawOutput::Empty`].
#[derive(Debug, Clone)]
pub struct ReplayInvoker {
    path: PathBuf,
}

impl ReplayInvoker {
    /// Replay the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ToolInvoker for ReplayInvoker {
    async fn invoke(
        &self,
        ctx: &InvocationContext,
        handle: ToolHandle,
        version: Version,
        args: String,
    ) -> Result<RawOutput, InvocationError> {
        tracing::debug!(
            scan_id = %ctx.scan_id,
            tool = %handle.reference(version),
            args = %args,
            path = %self.path.display(),
            "replaying captured output"
        );

        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            InvocationError::with_source(format!("cannot read {}", self.path.display()), e)
        })?;

        if text.trim().is_empty() {
            Ok(RawOutput::Empty)
        } else {
            Ok(RawOutput::Raw(text))
        }
    }
}
