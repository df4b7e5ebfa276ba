// src/graph/binding.rs

//! Derived artifact/platform relation.
//!
//! Groups producers, signers and publishers by `(artifact, platform)` so the
//! signer pass can look up candidate producers without rescanning the whole
//! inventory for every signer. Built fresh for every augmentation and never
//! stored on the graph.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::task::{Task, TaskName};
use crate::graph::task_graph::TaskGraph;
use crate::types::{ArtifactScope, TaskKind};

/// Tasks that produce, sign or publish one artifact on one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactBinding {
    pub artifact: Option<String>,
    pub platform: String,
    pub producers: BTreeSet<TaskName>,
    pub signers: BTreeSet<TaskName>,
    pub publishers: BTreeSet<TaskName>,
}

type BindingKey = (String, Option<String>);

/// All bindings of a graph, keyed by platform first.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    by_key: BTreeMap<BindingKey, ArtifactBinding>,
}

/// Derive the artifact bindings of every task that declares a platform.
///
/// Tasks without a platform qualifier, and tasks of kind
/// [`TaskKind::Other`], are skipped.
pub fn bind_artifacts(graph: &TaskGraph) -> Bindings {
    let mut by_key: BTreeMap<BindingKey, ArtifactBinding> = BTreeMap::new();

    for task in graph.tasks() {
        let Some(platform) = task.platform.as_ref() else {
            continue;
        };
        if task.is(TaskKind::Other) {
            continue;
        }

        let key = (platform.clone(), task.artifact.clone());
        let binding = by_key.entry(key).or_insert_with(|| ArtifactBinding {
            artifact: task.artifact.clone(),
            platform: platform.clone(),
            ..ArtifactBinding::default()
        });

        let bucket = match task.kind {
            TaskKind::Producer => &mut binding.producers,
            TaskKind::Signer => &mut binding.signers,
            _ => &mut binding.publishers,
        };
        bucket.insert(task.name.clone());
    }

    Bindings { by_key }
}

impl Bindings {
    /// Every binding, ordered by platform then artifact.
    pub fn iter(&self) -> impl Iterator<Item = &ArtifactBinding> {
        self.by_key.values()
    }

    pub fn get(&self, platform: &str, artifact: Option<&str>) -> Option<&ArtifactBinding> {
        self.by_key
            .get(&(platform.to_string(), artifact.map(str::to_string)))
    }

    /// Producers a signer must wait for.
    ///
    /// Platform matching is exact; a signer without a platform matches
    /// nothing. Under [`ArtifactScope::ArtifactAndPlatform`] a producer whose
    /// declared artifact differs from the signer's declared artifact is
    /// excluded; undeclared artifacts on either side still match.
    pub fn producers_for(&self, signer: &Task, scope: ArtifactScope) -> BTreeSet<&str> {
        let Some(platform) = signer.platform.as_deref() else {
            return BTreeSet::new();
        };

        self.by_key
            .values()
            .filter(|b| b.platform == platform)
            .filter(|b| match scope {
                ArtifactScope::Platform => true,
                ArtifactScope::ArtifactAndPlatform => {
                    match (signer.artifact.as_deref(), b.artifact.as_deref()) {
                        (Some(ours), Some(theirs)) => ours == theirs,
                        _ => true,
                    }
                }
            })
            .flat_map(|b| b.producers.iter().map(String::as_str))
            .collect()
    }
}
