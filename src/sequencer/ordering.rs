// src/sequencer/ordering.rs

use tracing::{debug, info};

use crate::graph::{Edge, TaskGraph, bind_artifacts};
use crate::types::{ArtifactScope, TaskKind};

/// Order every signer after the producers of its platform.
///
/// Platform matching is exact: a signer is never ordered after a producer
/// of another platform. Signers with no matching producer (e.g. re-signing
/// a cached artifact) are skipped. Returns the edges that were new.
pub fn compute_signer_ordering(graph: &mut TaskGraph, scope: ArtifactScope) -> Vec<Edge> {
    let bindings = bind_artifacts(graph);

    let candidates: Vec<Edge> = graph
        .tasks_of_kind(TaskKind::Signer)
        .flat_map(|signer| {
            let producers = bindings.producers_for(signer, scope);
            if producers.is_empty() {
                debug!(signer = %signer.name, "sequencer: no producers for signer");
            }
            producers
                .into_iter()
                .map(|producer| Edge::new(producer, signer.name.as_str()))
                .collect::<Vec<_>>()
        })
        .collect();

    let added = insert_new(graph, candidates);
    info!(added = added.len(), "sequencer: signer ordering applied");
    added
}

/// Order every publisher after every signer.
///
/// A publish step may reuse signatures of several publications, so this is
/// deliberately not restricted to the publisher's platform.
pub fn compute_publisher_ordering(graph: &mut TaskGraph) -> Vec<Edge> {
    let signers: Vec<&str> = graph
        .tasks_of_kind(TaskKind::Signer)
        .map(|t| t.name.as_str())
        .collect();

    let candidates: Vec<Edge> = graph
        .tasks_of_kind(TaskKind::Publisher)
        .flat_map(|publisher| {
            signers
                .iter()
                .map(|signer| Edge::new(*signer, publisher.name.as_str()))
        })
        .collect();

    let added = insert_new(graph, candidates);
    info!(added = added.len(), "sequencer: publisher ordering applied");
    added
}

fn insert_new(graph: &mut TaskGraph, candidates: Vec<Edge>) -> Vec<Edge> {
    let mut added = Vec::new();
    for edge in candidates {
        if graph.insert_edge(edge.clone()) {
            debug!(%edge, "sequencer: added ordering edge");
            added.push(edge);
        }
    }
    added
}
