use pubseq::graph::{Edge, Task, bind_artifacts};
use pubseq::sequencer::{compute_publisher_ordering, compute_signer_ordering};
use pubseq::types::{ArtifactScope, TaskKind};
use pubseq_test_utils::builders::GraphBuilder;
use pubseq_test_utils::init_tracing;

#[test]
fn signer_is_ordered_after_same_platform_producers_only() {
    init_tracing();

    let mut graph = GraphBuilder::new()
        .producer("linkDebugTest/macosArm64", "macosArm64")
        .producer("linkDebugTest/linuxX64", "linuxX64")
        .signer("sign/macosArm64", "macosArm64")
        .build();

    let added = compute_signer_ordering(&mut graph, ArtifactScope::Platform);

    assert_eq!(
        added,
        vec![Edge::new("linkDebugTest/macosArm64", "sign/macosArm64")]
    );
    assert!(graph.has_edge("linkDebugTest/macosArm64", "sign/macosArm64"));
    assert!(!graph.has_edge("linkDebugTest/linuxX64", "sign/macosArm64"));
}

#[test]
fn signer_waits_for_every_producer_of_its_platform() {
    let mut graph = GraphBuilder::new()
        .producer("linkDebugTestMacosArm64", "macosArm64")
        .producer("linkWorkerTestDebugTestMacosArm64", "macosArm64")
        .producer("compileTestKotlinMacosArm64", "macosArm64")
        .signer("signMacosArm64Publication", "macosArm64")
        .build();

    let added = compute_signer_ordering(&mut graph, ArtifactScope::Platform);

    assert_eq!(added.len(), 3);
    assert_eq!(
        graph.dependencies_of("signMacosArm64Publication"),
        vec![
            "compileTestKotlinMacosArm64",
            "linkDebugTestMacosArm64",
            "linkWorkerTestDebugTestMacosArm64",
        ]
    );
}

#[test]
fn signer_without_matching_producer_is_skipped() {
    let mut graph = GraphBuilder::new()
        .producer("linkDebugTestLinuxX64", "linuxX64")
        .signer("signMingwX64Publication", "mingwX64")
        .task(Task::new("signKotlinMultiplatformPublication", TaskKind::Signer))
        .build();

    let added = compute_signer_ordering(&mut graph, ArtifactScope::Platform);

    assert!(added.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn artifact_scope_excludes_producers_of_other_artifacts() {
    let mut graph = GraphBuilder::new()
        .task(
            Task::new("linkCore", TaskKind::Producer)
                .with_platform("linuxX64")
                .with_artifact("core"),
        )
        .task(
            Task::new("linkTest", TaskKind::Producer)
                .with_platform("linuxX64")
                .with_artifact("test"),
        )
        .task(Task::new("linkShared", TaskKind::Producer).with_platform("linuxX64"))
        .task(
            Task::new("signCore", TaskKind::Signer)
                .with_platform("linuxX64")
                .with_artifact("core"),
        )
        .build();

    let mut platform_only = graph.clone();
    assert_eq!(
        compute_signer_ordering(&mut platform_only, ArtifactScope::Platform).len(),
        3
    );

    let added = compute_signer_ordering(&mut graph, ArtifactScope::ArtifactAndPlatform);
    assert_eq!(
        added,
        vec![
            Edge::new("linkCore", "signCore"),
            Edge::new("linkShared", "signCore"),
        ]
    );
    assert!(!graph.has_edge("linkTest", "signCore"));
}

#[test]
fn every_publisher_depends_on_every_signer() {
    let mut graph = GraphBuilder::new()
        .signer("signA", "macosArm64")
        .signer("signB", "linuxX64")
        .publisher("publishX")
        .build();

    let added = compute_publisher_ordering(&mut graph);

    assert_eq!(added.len(), 2);
    assert!(graph.has_edge("signA", "publishX"));
    assert!(graph.has_edge("signB", "publishX"));
}

#[test]
fn publisher_ordering_ignores_platforms() {
    let mut graph = GraphBuilder::new()
        .signer("signMacosArm64Publication", "macosArm64")
        .signer("signAndroidNativeArm64Publication", "androidNativeArm64")
        .task(
            Task::new(
                "publishAndroidNativeArm32PublicationToMavenLocal",
                TaskKind::Publisher,
            )
            .with_platform("androidNativeArm32"),
        )
        .build();

    compute_publisher_ordering(&mut graph);

    assert!(graph.has_edge(
        "signAndroidNativeArm64Publication",
        "publishAndroidNativeArm32PublicationToMavenLocal"
    ));
    assert!(graph.has_edge(
        "signMacosArm64Publication",
        "publishAndroidNativeArm32PublicationToMavenLocal"
    ));
}

#[test]
fn no_signers_means_no_new_edges() {
    let mut graph = GraphBuilder::new()
        .producer("linkDebugTestMacosArm64", "macosArm64")
        .producer("linkDebugTestLinuxX64", "linuxX64")
        .build();

    let signer_edges = compute_signer_ordering(&mut graph, ArtifactScope::Platform);
    let publisher_edges = compute_publisher_ordering(&mut graph);

    assert!(signer_edges.is_empty());
    assert!(publisher_edges.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn other_tasks_are_never_reordered() {
    let mut graph = GraphBuilder::new()
        .producer("linkDebugTestLinuxX64", "linuxX64")
        .task(Task::new("check", TaskKind::Other).with_platform("linuxX64"))
        .signer("signLinuxX64Publication", "linuxX64")
        .publisher("publish")
        .build();

    compute_signer_ordering(&mut graph, ArtifactScope::Platform);
    compute_publisher_ordering(&mut graph);

    assert!(graph.dependencies_of("check").is_empty());
    assert!(graph.dependents_of("check").is_empty());
}

#[test]
fn bindings_group_roles_by_platform_and_artifact() {
    let graph = GraphBuilder::new()
        .producer("linkDebugTestLinuxX64", "linuxX64")
        .signer("signLinuxX64Publication", "linuxX64")
        .task(
            Task::new("linkCoreMacosArm64", TaskKind::Producer)
                .with_platform("macosArm64")
                .with_artifact("core"),
        )
        .task(Task::new("publishLinuxX64", TaskKind::Publisher).with_platform("linuxX64"))
        .publisher("publishAll")
        .other("check")
        .build();

    let bindings = bind_artifacts(&graph);

    assert_eq!(bindings.iter().count(), 2);

    let linux = bindings.get("linuxX64", None).unwrap();
    assert!(linux.producers.contains("linkDebugTestLinuxX64"));
    assert!(linux.signers.contains("signLinuxX64Publication"));
    assert!(linux.publishers.contains("publishLinuxX64"));

    let macos = bindings.get("macosArm64", Some("core")).unwrap();
    assert_eq!(macos.artifact.as_deref(), Some("core"));
    assert_eq!(macos.producers.len(), 1);
    assert!(bindings.get("macosArm64", None).is_none());
}
