//! In-process host built from a registry, an invoker and a sink.
//!
//! `LocalHost` satisfies [`HostClient`] by delegating each capability to
//! a dedicated collaborator. The fixture invoker and memory sink here are
//! enough to drive an adapter end to end without a platform.

use async_trait::async_trait;
use indexmap::IndexMap;
use recon_core::{ToolName, ToolRef, Version};
use recon_report::Report;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::{DeliveryError, HostClient, InvocationContext, InvocationError, ToolUnavailable};
use crate::handle::ToolHandle;
use crate::output::RawOutput;
use crate::registry::SharedRegistry;

/// Runs a resolved tool
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    /// Run `handle` at `version` with `args` and wait for completion
    async fn invoke(
        &self,
        ctx: &InvocationContext,
        handle: ToolHandle,
        version: Version,
        args: String,
    ) -> Result<RawOutput, InvocationError>;
}

/// Receives finished reports
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Accept a report
    async fn deliver(&self, ctx: &InvocationContext, report: &Report) -> Result<(), DeliveryError>;
}

/// Host client assembled from local parts
pub struct LocalHost<I, S> {
    registry: Arc<SharedRegistry>,
    invoker: I,
    sink: S,
}

impl<I, S> LocalHost<I, S>
where
    I: ToolInvoker,
    S: ReportSink,
{
    /// Create a host
    #[must_use]
    pub fn new(registry: Arc<SharedRegistry>, invoker: I, sink: S) -> Self {
        Self {
            registry,
            invoker,
            sink,
        }
    }

    /// The registry used for resolution
    #[must_use]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// The invoker
    #[must_use]
    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// The sink
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[async_trait]
impl<I, S> HostClient for LocalHost<I, S>
where
    I: ToolInvoker,
    S: ReportSink,
{
    async fn resolve(
        &self,
        _ctx: &InvocationContext,
        name: &ToolName,
    ) -> Result<ToolHandle, ToolUnavailable> {
        self.registry.resolve(name)
    }

    async fn invoke(
        &self,
        ctx: &InvocationContext,
        handle: ToolHandle,
        version: Version,
        args: String,
    ) -> Result<RawOutput, InvocationError> {
        self.invoker.invoke(ctx, handle, version, args).await
    }

    async fn deliver(&self, ctx: &InvocationContext, report: &Report) -> Result<(), DeliveryError> {
        self.sink.deliver(ctx, report).await
    }
}

/// A recorded tool run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Tool and version that ran
    pub tool: ToolRef,
    /// Command arguments
    pub args: String,
}

/// Invoker that replays canned output per tool and records every call
#[derive(Debug, Default)]
pub struct FixtureInvoker {
    outputs: IndexMap<ToolName, RawOutput>,
    calls: Mutex<Vec<Invocation>>,
}

impl FixtureInvoker {
    /// Create an invoker with no fixtures
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer invocations of `tool` with `output`
    #[must_use]
    pub fn with_output(mut self, tool: ToolName, output: RawOutput) -> Self {
        self.outputs.insert(tool, output);
        self
    }

    /// Invocations seen so far
    pub async fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ToolInvoker for FixtureInvoker {
    async fn invoke(
        &self,
        _ctx: &InvocationContext,
        handle: ToolHandle,
        version: Version,
        args: String,
    ) -> Result<RawOutput, InvocationError> {
        let tool = handle.reference(version);
        self.calls.lock().await.push(Invocation {
            tool: tool.clone(),
            args,
        });
        self.outputs
            .get(&handle.name)
            .cloned()
            .ok_or_else(|| InvocationError::new(format!("no fixture output for {}", tool)))
    }
}

/// Sink that keeps delivered reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<Report>>,
}

impl MemorySink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports delivered so far, oldest first
    pub async fn reports(&self) -> Vec<Report> {
        self.reports.lock().await.clone()
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn deliver(&self, _ctx: &InvocationContext, report: &Report) -> Result<(), DeliveryError> {
        self.reports.lock().await.push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_report::Finding;

    fn wappalyzer() -> ToolName {
        ToolName::new("barbudo/wappalyzer").unwrap()
    }

    fn host(invoker: FixtureInvoker) -> LocalHost<FixtureInvoker, MemorySink> {
        let registry = SharedRegistry::new();
        registry
            .register(ToolHandle::new(wappalyzer(), vec![Version::new(0, 0, 2)]))
            .unwrap();
        LocalHost::new(Arc::new(registry), invoker, MemorySink::new())
    }

    #[tokio::test]
    async fn test_resolve_through_registry() {
        let host = host(FixtureInvoker::new());
        let ctx = InvocationContext::new();

        assert!(host.resolve(&ctx, &wappalyzer()).await.is_ok());
        let missing = ToolName::new("barbudo/retirejs").unwrap();
        assert!(host.resolve(&ctx, &missing).await.is_err());
    }

    #[tokio::test]
    async fn test_fixture_invoker_records_calls() {
        let host = host(
            FixtureInvoker::new().with_output(wappalyzer(), RawOutput::Raw("{}".to_string())),
        );
        let ctx = InvocationContext::new();
        let handle = host.resolve(&ctx, &wappalyzer()).await.unwrap();

        let output = host
            .invoke(&ctx, handle, Version::new(0, 0, 2), "http://example.com".to_string())
            .await
            .unwrap();
        assert_eq!(output, RawOutput::Raw("{}".to_string()));

        let calls = host.invoker().calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool.to_string(), "barbudo/wappalyzer:0.0.2");
        assert_eq!(calls[0].args, "http://example.com");
    }

    #[tokio::test]
    async fn test_fixture_invoker_missing_output() {
        let host = host(FixtureInvoker::new());
        let ctx = InvocationContext::new();
        let handle = host.resolve(&ctx, &wappalyzer()).await.unwrap();

        let err = host
            .invoke(&ctx, handle, Version::new(0, 0, 2), String::new())
            .await
            .unwrap_err();
        assert!(err.message.contains("no fixture output"));
    }

    #[tokio::test]
    async fn test_memory_sink_collects() {
        let host = host(FixtureInvoker::new());
        let ctx = InvocationContext::new();
        let report = Report::from_findings(vec![Finding::new("Nginx", "", 100)]);

        host.deliver(&ctx, &Report::Empty).await.unwrap();
        host.deliver(&ctx, &report).await.unwrap();

        assert_eq!(host.sink().reports().await, vec![Report::Empty, report]);
    }
}
