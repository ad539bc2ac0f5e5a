//! Observability hooks for the adapter pipeline.
//!
//! The pipeline itself never logs. Hosts that want visibility pass a
//! [`PipelineObserver`] to the adapter and receive every transition,
//! failure and delivered report.

use recon_core::ToolName;
use recon_report::{Report, ReportKind};
use std::sync::{Mutex, PoisonError};

use crate::adapter::{AdapterError, Stage};
use crate::client::InvocationContext;

/// Receives pipeline events
///
/// All hooks default to doing nothing.
pub trait PipelineObserver: Send + Sync {
    /// The pipeline entered `stage`
    fn on_transition(&self, ctx: &InvocationContext, tool: &ToolName, stage: Stage) {
        let _ = (ctx, tool, stage);
    }

    /// The pipeline failed while in `stage`
    fn on_failure(&self, ctx: &InvocationContext, tool: &ToolName, stage: Stage, error: &AdapterError) {
        let _ = (ctx, tool, stage, error);
    }

    /// The sink accepted `report`
    fn on_report(&self, ctx: &InvocationContext, tool: &ToolName, report: &Report) {
        let _ = (ctx, tool, report);
    }
}

/// Observer that emits structured `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_transition(&self, ctx: &InvocationContext, tool: &ToolName, stage: Stage) {
        tracing::debug!(scan_id = %ctx.scan_id, tool = %tool, stage = %stage, "pipeline transition");
    }

    fn on_failure(&self, ctx: &InvocationContext, tool: &ToolName, stage: Stage, error: &AdapterError) {
        tracing::warn!(
            scan_id = %ctx.scan_id,
            tool = %tool,
            stage = %stage,
            error = %error,
            "pipeline failed"
        );
    }

    fn on_report(&self, ctx: &InvocationContext, tool: &ToolName, report: &Report) {
        tracing::info!(
            scan_id = %ctx.scan_id,
            tool = %tool,
            kind = %report.kind(),
            findings = report.findings().len(),
            "report delivered"
        );
    }
}

/// Event captured by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Entered a stage
    Transition(Stage),
    /// Failed in a stage
    Failure {
        /// Stage the failure was raised from
        stage: Stage,
        /// Rendered error
        message: String,
    },
    /// Report delivered
    Report {
        /// Report kind
        kind: ReportKind,
        /// Number of findings
        findings: usize,
    },
}

/// Observer that records events in memory
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingObserver {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Stages entered so far, in order
    #[must_use]
    pub fn stages(&self) -> Vec<Stage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                PipelineEvent::Transition(stage) => Some(stage),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: PipelineEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl PipelineObserver for RecordingObserver {
    fn on_transition(&self, _ctx: &InvocationContext, _tool: &ToolName, stage: Stage) {
        self.push(PipelineEvent::Transition(stage));
    }

    fn on_failure(&self, _ctx: &InvocationContext, _tool: &ToolName, stage: Stage, error: &AdapterError) {
        self.push(PipelineEvent::Failure {
            stage,
            message: error.to_string(),
        });
    }

    fn on_report(&self, _ctx: &InvocationContext, _tool: &ToolName, report: &Report) {
        self.push(PipelineEvent::Report {
            kind: report.kind(),
            findings: report.findings().len(),
        });
    }
}
