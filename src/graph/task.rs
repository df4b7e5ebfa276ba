// src/graph/task.rs

use std::fmt;

use crate::types::TaskKind;

/// Tasks are identified by their (unique) name.
pub type TaskName = String;

/// A named unit of work plus the metadata the sequencer matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: TaskName,
    pub kind: TaskKind,
    /// Logical artifact this task produces or consumes, if known.
    pub artifact: Option<String>,
    /// Platform qualifier (e.g. `macosArm64`) used to pair producers with
    /// signers.
    pub platform: Option<String>,
}

impl Task {
    pub fn new(name: impl Into<TaskName>, kind: TaskKind) -> Self {
        Self {
            name: name.into(),
            kind,
            artifact: None,
            platform: None,
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_artifact(mut self, artifact: impl Into<String>) -> Self {
        self.artifact = Some(artifact.into());
        self
    }

    pub fn is(&self, kind: TaskKind) -> bool {
        self.kind == kind
    }
}

/// `downstream` must not start before `upstream` completes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub upstream: TaskName,
    pub downstream: TaskName,
}

impl Edge {
    pub fn new(upstream: impl Into<TaskName>, downstream: impl Into<TaskName>) -> Self {
        Self {
            upstream: upstream.into(),
            downstream: downstream.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.upstream, self.downstream)
    }
}
