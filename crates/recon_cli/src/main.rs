//! RECON CLI
//!
//! Runs the Wappalyzer adapter against captured tool output.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod replay;
mod sink;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use config::{CONFIG_ENV, LogConfig, ReconConfig};
use recon_core::Version;
use recon_tool::{InvocationContext, LocalHost, TargetSpec, TracingObserver, VersionSelection};
use replay::ReplayInvoker;
use sink::JsonSink;
use std::env::VarError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "RECON_LOG";

#[derive(Parser)]
#[command(name = "recon")]
#[command(about = "RECON - Technology fingerprinting adapter host", long_about = None)]
struct Cli {
    /// Config file (defaults to $RECON_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline against a captured tool output
    Scan {
        /// Target URL
        #[arg(short, long)]
        target: String,
        /// Captured Wappalyzer output to replay
        #[arg(short, long)]
        output: PathBuf,
        /// Tool version to run instead of the configured one
        #[arg(long)]
        pin: Option<Version>,
    },
    /// Parse and normalize a Wappalyzer output file
    Parse {
        /// Path to tool output
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = cli.config.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config = ReconConfig::load_or_default(config_path.as_deref())?;
    init_tracing(&config.log)?;

    match cli.command {
        Commands::Scan { target, output, pin } => scan(&config, target, output, pin).await,
        Commands::Parse { file } => parse(&file),
    }
}

fn init_tracing(log: &LogConfig) -> Result<()> {
    let env = match std::env::var(LOG_ENV) {
        Ok(directives) => Some(directives),
        Err(VarError::NotPresent) => None,
        Err(err) => return Err(err).wrap_err_with(|| format!("invalid {LOG_ENV}")),
    };
    let filter = log_filter(env.as_deref(), &log.filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

/// `RECON_LOG` wins over the configured filter; neither may be malformed
fn log_filter(env: Option<&str>, configured: &str) -> Result<EnvFilter> {
    match env {
        Some(directives) => EnvFilter::try_new(directives)
            .wrap_err_with(|| format!("invalid {LOG_ENV} filter {directives:?}")),
        None => EnvFilter::try_new(configured)
            .wrap_err_with(|| format!("invalid log.filter {configured:?}")),
    }
}

async fn scan(config: &ReconConfig, target: String, output: PathBuf, pin: Option<Version>) -> Result<()> {
    let registry = Arc::new(config.build_registry()?);
    let host = LocalHost::new(registry, ReplayInvoker::new(output), JsonSink::stdout());

    let version = pin.map_or(config.wappalyzer.version, VersionSelection::Pinned);
    let adapter = recon_wappalyzer::adapter()
        .with_version(version)
        .with_observer(Arc::new(TracingObserver));

    let ctx = InvocationContext::new();
    tracing::info!(scan_id = %ctx.scan_id, target = %target, "starting scan");

    adapter
        .handle(&ctx, &host, &TargetSpec::new(target))
        .await
        .wrap_err_with(|| format!("scan {} failed", ctx.scan_id))?;
    Ok(())
}

fn parse(file: &std::path::Path) -> Result<()> {
    let raw = std::fs::read_to_string(file).wrap_err_with(|| format!("cannot read {}", file.display()))?;
    let report = recon_wappalyzer::adapter().parse_and_normalize(&raw)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_prefers_env() {
        let filter = log_filter(Some("recon=debug"), "recon=info").unwrap();
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn test_log_filter_uses_config_without_env() {
        let filter = log_filter(None, "recon=warn").unwrap();
        assert!(filter.to_string().contains("warn"));
    }

    #[test]
    fn test_log_filter_rejects_malformed_env() {
        let err = log_filter(Some("recon=loud"), "recon=info").unwrap_err();
        assert!(err.to_string().contains("RECON_LOG"));
    }

    #[test]
    fn test_log_filter_rejects_malformed_config() {
        assert!(log_filter(None, "recon=loud").is_err());
    }
}
