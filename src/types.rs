// src/types.rs

use std::fmt;

use serde::Deserialize;

/// Role a task plays in a release pipeline.
///
/// - `Producer`: builds an artifact for one platform (link/compile steps).
/// - `Signer`: signs a previously produced artifact.
/// - `Publisher`: uploads (possibly signed) artifacts somewhere.
/// - `Other`: anything the sequencer does not reorder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Producer,
    Signer,
    Publisher,
    #[default]
    Other,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskKind::Producer => "producer",
            TaskKind::Signer => "signer",
            TaskKind::Publisher => "publisher",
            TaskKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// How a signer is matched to the producers it must wait for.
///
/// - `Platform` (default): platform qualifiers must be equal.
/// - `ArtifactAndPlatform`: platform qualifiers must be equal, and when both
///   tasks declare an artifact identifier those must be equal too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactScope {
    #[default]
    Platform,
    ArtifactAndPlatform,
}
