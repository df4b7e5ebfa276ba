// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::graph::TaskName;

#[derive(Error, Debug)]
pub enum SequencerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid role pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Task not found: {0}")]
    UnknownTask(TaskName),

    #[error("cycle detected in task graph: {}", render_cycle(.path))]
    CycleDetected { path: Vec<TaskName> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// `A -> B -> C -> A` for a path `[A, B, C]`.
fn render_cycle(path: &[TaskName]) -> String {
    let mut parts: Vec<&str> = path.iter().map(String::as_str).collect();
    if let Some(first) = path.first() {
        parts.push(first.as_str());
    }
    parts.join(" -> ")
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SequencerError>;
