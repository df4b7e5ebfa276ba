// src/sequencer/augment.rs

use tracing::info;

use crate::errors::Result;
use crate::graph::{Edge, TaskGraph, TaskName};
use crate::sequencer::acyclic::validate_acyclic;
use crate::sequencer::ordering::{compute_publisher_ordering, compute_signer_ordering};
use crate::types::ArtifactScope;

/// Knobs for a single augmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequencerOptions {
    pub scope: ArtifactScope,
}

/// What an augmentation changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Augmentation {
    /// `producer -> signer` edges added by the signer pass.
    pub signer_edges: Vec<Edge>,
    /// `signer -> publisher` edges added by the publisher pass.
    pub publisher_edges: Vec<Edge>,
    /// A valid execution order of the augmented graph.
    pub order: Vec<TaskName>,
}

impl Augmentation {
    pub fn added(&self) -> usize {
        self.signer_edges.len() + self.publisher_edges.len()
    }

    pub fn is_noop(&self) -> bool {
        self.added() == 0
    }
}

/// Augment `graph` with signer and publisher ordering, then validate it.
///
/// The graph is taken by value and handed back only if it is acyclic.
/// Running this again on its own output adds no edges.
pub fn augment(
    mut graph: TaskGraph,
    options: &SequencerOptions,
) -> Result<(TaskGraph, Augmentation)> {
    let signer_edges = compute_signer_ordering(&mut graph, options.scope);
    let publisher_edges = compute_publisher_ordering(&mut graph);
    let order = validate_acyclic(&graph)?;

    info!(
        tasks = graph.task_count(),
        edges = graph.edge_count(),
        added = signer_edges.len() + publisher_edges.len(),
        "sequencer: graph augmented"
    );

    Ok((
        graph,
        Augmentation {
            signer_edges,
            publisher_edges,
            order,
        },
    ))
}
