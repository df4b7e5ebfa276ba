#![allow(dead_code)]

use std::collections::BTreeMap;

use pubseq::config::{InventoryFile, RawInventoryFile, RuleConfig, TaskConfig};
use pubseq::graph::{Task, TaskGraph};
use pubseq::types::{ArtifactScope, TaskKind};

/// Builder for `TaskGraph` with typed tasks, bypassing the inventory.
#[derive(Default)]
pub struct GraphBuilder {
    graph: TaskGraph,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(mut self, task: Task) -> Self {
        self.graph.insert_task(task);
        self
    }

    pub fn producer(self, name: &str, platform: &str) -> Self {
        self.task(Task::new(name, TaskKind::Producer).with_platform(platform))
    }

    pub fn signer(self, name: &str, platform: &str) -> Self {
        self.task(Task::new(name, TaskKind::Signer).with_platform(platform))
    }

    pub fn publisher(self, name: &str) -> Self {
        self.task(Task::new(name, TaskKind::Publisher))
    }

    pub fn other(self, name: &str) -> Self {
        self.task(Task::new(name, TaskKind::Other))
    }

    /// `upstream -> downstream`; both must be added (in any order) before
    /// `build`.
    pub fn edge(mut self, upstream: &str, downstream: &str) -> Self {
        self.edges.push((upstream.to_string(), downstream.to_string()));
        self
    }

    pub fn build(mut self) -> TaskGraph {
        for (up, down) in self.edges.iter() {
            self.graph
                .add_edge(up, down)
                .expect("edge endpoints must be known tasks");
        }
        self.graph
    }
}

/// Builder for `InventoryFile` to simplify test setup.
pub struct InventoryBuilder {
    raw: RawInventoryFile,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawInventoryFile::default(),
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.raw.task.insert(name.to_string(), task);
        self
    }

    /// Task with no declared metadata; the role rules decide.
    pub fn with_named_task(self, name: &str) -> Self {
        self.with_task(name, TaskConfig::default())
    }

    pub fn with_rule(mut self, kind: TaskKind, pattern: &str) -> Self {
        self.raw.sequencer.rules.push(RuleConfig {
            kind,
            pattern: pattern.to_string(),
        });
        self
    }

    pub fn without_default_rules(mut self) -> Self {
        self.raw.sequencer.use_default_rules = false;
        self
    }

    pub fn scope(mut self, scope: ArtifactScope) -> Self {
        self.raw.sequencer.scope = scope;
        self
    }

    pub fn require_signing(mut self, val: bool) -> Self {
        self.raw.release.require_signing = val;
        self
    }

    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.raw
            .release
            .properties
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(self) -> RawInventoryFile {
        self.raw
    }

    pub fn build(self) -> InventoryFile {
        InventoryFile::try_from(self.raw).expect("Failed to build valid inventory from builder")
    }
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
#[derive(Default)]
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TaskKind) -> Self {
        self.task.kind = Some(kind);
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.task.platform = Some(platform.to_string());
        self
    }

    pub fn artifact(mut self, artifact: &str) -> Self {
        self.task.artifact = Some(artifact.to_string());
        self
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

/// Secrets map for `plan_release`.
pub fn secrets(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
