//! Generic tool adapter.
//!
//! One `Adapter<I>` drives any tool whose output decodes into items of type
//! `I`. The tool-specific parts are a parser function and an argument
//! mapping; sequencing, the output-kind guard, normalization, delivery and
//! error classification are shared.
//!
//! An invocation walks `Start -> ToolResolved -> Invoked -> Parsed ->
//! Normalized -> Reported -> Done` exactly once. Any failure ends it with an
//! [`AdapterError`] that records the stage it was raised from.

use recon_core::{ToolName, Version};
use recon_report::{Finding, Report, normalize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::client::{DeliveryError, HostClient, InvocationContext, InvocationError, ToolUnavailable};
use crate::handle::VersionSelection;
use crate::observe::PipelineObserver;
use crate::output::{OutputKind, RawOutput};
use crate::parse::ParseError;

/// Decodes a tool's raw text into items
pub type ParseFn<I> = fn(&str) -> Result<Vec<I>, ParseError>;

/// Builds the tool's command-argument string from a target
pub type ArgsFn = fn(&TargetSpec) -> String;

/// What to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    /// Target URI or identifier
    pub target: String,
    /// Free-form command arguments, passed through unescaped
    pub command_args: String,
}

impl TargetSpec {
    /// Target whose command arguments are the target itself
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            command_args: target.clone(),
            target,
        }
    }

    /// Override the command arguments
    #[must_use]
    pub fn with_command_args(mut self, args: impl Into<String>) -> Self {
        self.command_args = args.into();
        self
    }
}

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Nothing done yet
    Start,
    /// Handle resolved and version selected
    ToolResolved,
    /// Tool finished
    Invoked,
    /// Output decoded
    Parsed,
    /// Report built
    Normalized,
    /// Sink accepted the report
    Reported,
    /// Invocation complete
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::ToolResolved => "tool-resolved",
            Self::Invoked => "invoked",
            Self::Parsed => "parsed",
            Self::Normalized => "normalized",
            Self::Reported => "reported",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Error from an adapter invocation
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The tool could not be resolved
    #[error(transparent)]
    ToolUnavailable(#[from] ToolUnavailable),

    /// The tool ran but failed
    #[error("Invocation of {tool}:{version} failed")]
    Invocation {
        /// Tool that ran
        tool: ToolName,
        /// Version that ran
        version: Version,
        /// Host-reported failure
        #[source]
        source: InvocationError,
    },

    /// The tool produced output this adapter cannot parse
    #[error("Unexpected output kind from {tool}: expected {expected}, got {actual}")]
    UnexpectedOutputKind {
        /// Tool that ran
        tool: ToolName,
        /// Kind the parser accepts
        expected: OutputKind,
        /// Kind the host returned
        actual: OutputKind,
    },

    /// The raw output was malformed
    #[error("Failed to parse {tool} output")]
    Parse {
        /// Tool whose output was rejected
        tool: ToolName,
        /// Decode failure
        #[source]
        source: ParseError,
    },

    /// The sink did not accept the report
    #[error("Report delivery failed")]
    Delivery {
        /// Sink failure
        #[source]
        source: DeliveryError,
    },
}

impl AdapterError {
    /// Stage the pipeline was in when it failed
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::ToolUnavailable(_) => Stage::Start,
            Self::Invocation { .. } => Stage::ToolResolved,
            Self::UnexpectedOutputKind { .. } | Self::Parse { .. } => Stage::Invoked,
            Self::Delivery { .. } => Stage::Normalized,
        }
    }
}

/// Adapter wrapping one external tool
pub struct Adapter<I> {
    tool: ToolName,
    version: VersionSelection,
    parse: ParseFn<I>,
    args: ArgsFn,
    observer: Option<Arc<dyn PipelineObserver>>,
}

impl<I> Adapter<I>
where
    I: Into<Finding> + Send,
{
    /// Create an adapter for `tool` using `parse` for its output
    #[must_use]
    pub fn new(tool: ToolName, parse: ParseFn<I>) -> Self {
        Self {
            tool,
            version: VersionSelection::Latest,
            parse,
            args: |target| target.command_args.clone(),
            observer: None,
        }
    }

    /// Select the tool version to run
    #[must_use]
    pub fn with_version(mut self, version: VersionSelection) -> Self {
        self.version = version;
        self
    }

    /// Set the argument mapping
    #[must_use]
    pub fn with_args(mut self, args: ArgsFn) -> Self {
        self.args = args;
        self
    }

    /// Attach an observer
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Tool this adapter drives
    #[must_use]
    pub fn tool(&self) -> &ToolName {
        &self.tool
    }

    /// Version selection policy
    #[must_use]
    pub fn version(&self) -> VersionSelection {
        self.version
    }

    /// Command arguments this adapter would pass for `target`
    #[must_use]
    pub fn args_for(&self, target: &TargetSpec) -> String {
        (self.args)(target)
    }

    /// Parse raw tool text and normalize it, without any host involvement
    ///
    /// # Errors
    ///
    /// Returns the parser's error if the text is malformed
    pub fn parse_and_normalize(&self, raw: &str) -> Result<Report, ParseError> {
        (self.parse)(raw).map(normalize)
    }

    /// Run the full pipeline for one target
    ///
    /// # Errors
    ///
    /// Returns the first failure; nothing is delivered unless every earlier
    /// stage succeeded
    pub async fn handle<C>(
        &self,
        ctx: &InvocationContext,
        client: &C,
        target: &TargetSpec,
    ) -> Result<(), AdapterError>
    where
        C: HostClient + ?Sized,
    {
        let mut run = Run::new(ctx, &self.tool, self.observer.as_deref());

        let handle = client
            .resolve(ctx, &self.tool)
            .await
            .map_err(|e| run.fail(e.into()))?;
        let version = self.version.select(&handle).map_err(|e| run.fail(e.into()))?;
        run.advance(Stage::ToolResolved);

        let output = client
            .invoke(ctx, handle, version, self.args_for(target))
            .await
            .map_err(|source| {
                run.fail(AdapterError::Invocation {
                    tool: self.tool.clone(),
                    version,
                    source,
                })
            })?;
        run.advance(Stage::Invoked);

        let raw = match output {
            RawOutput::Raw(text) => text,
            other => {
                return Err(run.fail(AdapterError::UnexpectedOutputKind {
                    tool: self.tool.clone(),
                    expected: OutputKind::Raw,
                    actual: other.kind(),
                }));
            }
        };
        let items = (self.parse)(&raw).map_err(|source| {
            run.fail(AdapterError::Parse {
                tool: self.tool.clone(),
                source,
            })
        })?;
        run.advance(Stage::Parsed);

        let report = normalize(items);
        run.advance(Stage::Normalized);

        client
            .deliver(ctx, &report)
            .await
            .map_err(|source| run.fail(AdapterError::Delivery { source }))?;
        run.advance(Stage::Reported);
        run.reported(&report);

        run.advance(Stage::Done);
        Ok(())
    }
}

impl<I> fmt::Debug for Adapter<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("tool", &self.tool)
            .field("version", &self.version)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// State of a single invocation
struct Run<'a> {
    ctx: &'a InvocationContext,
    tool: &'a ToolName,
    observer: Option<&'a dyn PipelineObserver>,
    stage: Stage,
}

impl<'a> Run<'a> {
    fn new(
        ctx: &'a InvocationContext,
        tool: &'a ToolName,
        observer: Option<&'a dyn PipelineObserver>,
    ) -> Self {
        Self {
            ctx,
            tool,
            observer,
            stage: Stage::Start,
        }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "stage {next} revisited after {}", self.stage);
        self.stage = next;
        if let Some(observer) = self.observer {
            observer.on_transition(self.ctx, self.tool, next);
        }
    }

    fn fail(&self, error: AdapterError) -> AdapterError {
        debug_assert_eq!(error.stage(), self.stage);
        if let Some(observer) = self.observer {
            observer.on_failure(self.ctx, self.tool, self.stage, &error);
        }
        error
    }

    fn reported(&self, report: &Report) {
        if let Some(observer) = self.observer {
            observer.on_report(self.ctx, self.tool, report);
        }
    }
}
