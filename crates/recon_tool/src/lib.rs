//! RECON Tool Adapters
//!
//! The adapter contract: resolve a tool through the host, invoke it, parse
//! its raw output, normalize into a canonical report and deliver it.
//! Tools and hosts are external; this crate only sequences them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod client;
pub mod handle;
pub mod host;
pub mod observe;
pub mod output;
pub mod parse;
pub mod registry;

pub use adapter::{Adapter, AdapterError, ArgsFn, ParseFn, Stage, TargetSpec};
pub use client::{BoxError, DeliveryError, HostClient, InvocationContext, InvocationError, ToolUnavailable};
pub use handle::{ToolHandle, VersionSelection};
pub use host::{FixtureInvoker, Invocation, LocalHost, MemorySink, ReportSink, ToolInvoker};
pub use observe::{PipelineEvent, PipelineObserver, RecordingObserver, TracingObserver};
pub use output::{OutputKind, RawOutput};
pub use parse::{ParseError, decode_json};
pub use registry::{RegistryError, SharedRegistry, ToolRegistry};
