// src/logging.rs

//! `tracing` subscriber setup.
//!
//! The filter comes from `--log-level` when given; otherwise `PUBSEQ_LOG` is
//! read as `EnvFilter` directives, so `PUBSEQ_LOG=pubseq::sequencer=debug`
//! narrows output to one module. Without either, everything at `info` and
//! above is shown. Output goes to stderr; stdout carries the plan.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "PUBSEQ_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Resolve the filter from the CLI level and the raw `PUBSEQ_LOG` value.
///
/// The CLI level wins, even over a malformed environment value.
pub fn log_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::new(level.as_directive()));
    }

    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {LOG_ENV} value '{directives}'")),
        None => Ok(EnvFilter::new(DEFAULT_DIRECTIVE)),
    }
}

/// Install the global subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let filter = log_filter(cli_level, env_value.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)?;

    Ok(())
}
