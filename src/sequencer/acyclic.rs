// src/sequencer/acyclic.rs

use std::collections::HashSet;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graphmap::DiGraphMap;

use crate::errors::{Result, SequencerError};
use crate::graph::{TaskGraph, TaskName};

/// Check that `graph` has no cycle and return a valid execution order.
///
/// On failure the error carries one offending cycle as task names in edge
/// order: edges `A -> B`, `B -> C`, `C -> A` yield some rotation of
/// `[A, B, C]`.
pub fn validate_acyclic(graph: &TaskGraph) -> Result<Vec<TaskName>> {
    // Edge direction: upstream -> downstream, so a topological order is an
    // execution order.
    let mut dag: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in graph.task_names() {
        dag.add_node(name);
    }
    for edge in graph.edges() {
        dag.add_edge(edge.upstream.as_str(), edge.downstream.as_str(), ());
    }

    match toposort(&dag, None) {
        Ok(order) => Ok(order.into_iter().map(str::to_string).collect()),
        Err(cycle) => Err(SequencerError::CycleDetected {
            path: cycle_through(&dag, cycle.node_id()),
        }),
    }
}

/// Walk from `start` back to itself inside its strongly connected component.
fn cycle_through<'a>(dag: &DiGraphMap<&'a str, ()>, start: &'a str) -> Vec<TaskName> {
    let component: HashSet<&str> = tarjan_scc(dag)
        .into_iter()
        .find(|scc| scc.contains(&start))
        .unwrap_or_default()
        .into_iter()
        .collect();

    let successors = |node: &'a str| -> Vec<&'a str> {
        let mut next: Vec<&str> = dag
            .neighbors(node)
            .filter(|n| component.contains(n))
            .collect();
        // Popped from the back: visit smallest names first.
        next.sort_unstable_by(|a, b| b.cmp(a));
        next
    };

    let mut path = vec![start];
    let mut visited = HashSet::from([start]);
    let mut frontier = vec![successors(start)];

    while let Some(candidates) = frontier.last_mut() {
        match candidates.pop() {
            Some(next) if next == start => {
                return path.into_iter().map(str::to_string).collect();
            }
            Some(next) => {
                if visited.insert(next) {
                    path.push(next);
                    frontier.push(successors(next));
                }
            }
            None => {
                frontier.pop();
                path.pop();
            }
        }
    }

    vec![start.to_string()]
}
