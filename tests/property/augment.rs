use std::collections::HashSet;

use proptest::prelude::*;
use pubseq::graph::{Task, TaskGraph};
use pubseq::sequencer::{SequencerOptions, augment};
use pubseq::types::{ArtifactScope, TaskKind};

const PLATFORMS: &[&str] = &["macosArm64", "linuxX64", "mingwX64"];

fn kind_from(idx: u8) -> TaskKind {
    match idx % 4 {
        0 => TaskKind::Producer,
        1 => TaskKind::Signer,
        2 => TaskKind::Publisher,
        _ => TaskKind::Other,
    }
}

// Strategy to generate an inventory that stays acyclic after augmentation.
// Tasks are ranked producer < signer < publisher < other, and existing edges
// only point from a lower to a higher rank, which is also the direction of
// every edge the sequencer adds.
fn graph_strategy(max_tasks: usize) -> impl Strategy<Value = TaskGraph> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let tasks = proptest::collection::vec(
            (0..4u8, proptest::option::of(0..PLATFORMS.len())),
            num_tasks,
        );
        let edges = proptest::collection::vec((any::<usize>(), any::<usize>()), 0..num_tasks * 2);

        (tasks, edges).prop_map(move |(mut raw_tasks, raw_edges)| {
            raw_tasks.sort_by_key(|(k, _)| kind_from(*k));

            let mut graph = TaskGraph::new();
            let names: Vec<String> = (0..raw_tasks.len()).map(|i| format!("task_{i:02}")).collect();

            for (name, (kind, platform)) in names.iter().zip(raw_tasks.iter()) {
                let mut task = Task::new(name.as_str(), kind_from(*kind));
                if let Some(p) = platform {
                    task = task.with_platform(PLATFORMS[*p]);
                }
                graph.insert_task(task);
            }

            for (a, b) in raw_edges {
                let (a, b) = (a % names.len(), b % names.len());
                if a < b {
                    graph.add_edge(&names[a], &names[b]).unwrap();
                }
            }
            graph
        })
    })
}

proptest! {
    #[test]
    fn augmentation_is_idempotent(graph in graph_strategy(12)) {
        let options = SequencerOptions::default();

        let (once, first) = augment(graph, &options).unwrap();
        let (twice, second) = augment(once.clone(), &options).unwrap();

        prop_assert!(second.is_noop());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(first.order, second.order);
    }

    #[test]
    fn signer_edges_never_cross_platforms(graph in graph_strategy(12)) {
        let options = SequencerOptions { scope: ArtifactScope::Platform };
        let (augmented, report) = augment(graph, &options).unwrap();

        for edge in report.signer_edges.iter() {
            let producer = augmented.task(&edge.upstream).unwrap();
            let signer = augmented.task(&edge.downstream).unwrap();
            prop_assert_eq!(producer.kind, TaskKind::Producer);
            prop_assert_eq!(signer.kind, TaskKind::Signer);
            prop_assert!(producer.platform.is_some());
            prop_assert_eq!(&producer.platform, &signer.platform);
        }
    }

    #[test]
    fn publishers_follow_all_signers(graph in graph_strategy(12)) {
        let (augmented, _) = augment(graph, &SequencerOptions::default()).unwrap();

        let signers: Vec<&str> = augmented
            .tasks_of_kind(TaskKind::Signer)
            .map(|t| t.name.as_str())
            .collect();
        for publisher in augmented.tasks_of_kind(TaskKind::Publisher) {
            let deps: HashSet<&str> = augmented.dependencies_of(&publisher.name).into_iter().collect();
            for signer in signers.iter() {
                prop_assert!(deps.contains(signer), "{} does not follow {}", publisher.name, signer);
            }
        }
    }

    #[test]
    fn order_respects_augmented_edges(graph in graph_strategy(12)) {
        let (augmented, report) = augment(graph, &SequencerOptions::default()).unwrap();

        prop_assert_eq!(report.order.len(), augmented.task_count());
        let pos = |name: &str| report.order.iter().position(|n| n == name).unwrap();
        for edge in augmented.edges() {
            prop_assert!(pos(&edge.upstream) < pos(&edge.downstream));
        }
    }
}
