// src/logging.rs

//! Logging setup for `simdag` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `SIMDAG_LOG` environment variable, any `EnvFilter` directive
//!    (e.g. "debug", "simdag::engine=trace")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout carries only the schedules.

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV: &str = "SIMDAG_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(cli_level, env_value.as_deref());

    fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Resolve the filter directive from the CLI flag and the env var value.
///
/// An env value that does not parse as a filter is ignored.
pub fn filter_directive(cli_level: Option<LogLevel>, env_value: Option<&str>) -> String {
    if let Some(lvl) = cli_level {
        return level_str(lvl).to_string();
    }

    env_value
        .map(str::trim)
        .filter(|s| !s.is_empty() && EnvFilter::try_new(s).is_ok())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}

fn level_str(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
