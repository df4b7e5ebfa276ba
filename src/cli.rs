// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pubseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pubseq",
    version,
    about = "Order signing and publishing tasks of a release task graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task inventory (TOML).
    ///
    /// Default: `Release.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Release.toml")]
    pub inventory: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PUBSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + classify, print the inventory, but don't augment.
    #[arg(long)]
    pub dry_run: bool,

    /// Also print a valid execution order of the augmented graph.
    #[arg(long)]
    pub order: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive applying this level to every target.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
