// src/graph/task_graph.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::config::model::InventoryFile;
use crate::errors::{Result, SequencerError};
use crate::graph::task::{Edge, Task, TaskName};
use crate::types::TaskKind;

/// In-memory task graph keyed by task name.
///
/// Edges are kept in an ordered set, so inserting an edge twice is a no-op
/// and iteration order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskGraph {
    tasks: BTreeMap<TaskName, Task>,
    edges: BTreeSet<Edge>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a validated [`InventoryFile`].
    ///
    /// Every task is classified through the inventory's role rules; every
    /// `after = [...]` entry becomes an edge `dep -> task`.
    ///
    /// Assumes that all `after` references are valid (checked during
    /// validation).
    pub fn from_inventory(inv: &InventoryFile) -> Self {
        let mut graph = TaskGraph::new();

        for (name, tc) in inv.task.iter() {
            let (kind, platform) = inv
                .classifier
                .classify(name, tc.kind, tc.platform.as_deref());
            graph.insert_task(Task {
                name: name.clone(),
                kind,
                artifact: tc.artifact.clone(),
                platform,
            });
        }

        for (name, tc) in inv.task.iter() {
            for dep in tc.after.iter() {
                graph.insert_edge(Edge::new(dep.as_str(), name.as_str()));
            }
        }

        graph
    }

    /// Insert or replace a task. Returns the previous task with the same
    /// name, if any. Existing edges are kept.
    pub fn insert_task(&mut self, task: Task) -> Option<Task> {
        self.tasks.insert(task.name.clone(), task)
    }

    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.get(name)
    }

    /// All tasks, ordered by name.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(|s| s.as_str())
    }

    pub fn tasks_of_kind(&self, kind: TaskKind) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(move |t| t.is(kind))
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Change the role of an existing task.
    pub fn reclassify(&mut self, name: &str, kind: TaskKind) -> Result<()> {
        let task = self
            .tasks
            .get_mut(name)
            .ok_or_else(|| SequencerError::UnknownTask(name.to_string()))?;
        task.kind = kind;
        Ok(())
    }

    /// Add `upstream -> downstream`. Returns `true` if the edge is new.
    ///
    /// Both endpoints must already be part of the graph.
    pub fn add_edge(&mut self, upstream: &str, downstream: &str) -> Result<bool> {
        for name in [upstream, downstream] {
            if !self.tasks.contains_key(name) {
                return Err(SequencerError::UnknownTask(name.to_string()));
            }
        }
        Ok(self.insert_edge(Edge::new(upstream, downstream)))
    }

    /// Insert an edge between tasks the caller knows to exist.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    pub fn has_edge(&self, upstream: &str, downstream: &str) -> bool {
        self.edges.contains(&Edge::new(upstream, downstream))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Immediate upstream tasks of `name`.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.downstream == name)
            .map(|e| e.upstream.as_str())
            .collect()
    }

    /// Immediate downstream tasks of `name`.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|e| e.upstream == name)
            .map(|e| e.downstream.as_str())
            .collect()
    }
}
