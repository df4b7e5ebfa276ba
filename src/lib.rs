// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod release;
pub mod roles;
pub mod sequencer;
pub mod types;

use std::fmt::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::config::model::InventoryFile;
use crate::errors::SequencerError;
use crate::graph::TaskGraph;
use crate::release::{
    Layered, ProcessEnv, SecretSource, apply_signing_policy, repository_url, resolve_signing_key,
};
use crate::sequencer::{Augmentation, SequencerOptions, augment};

/// Outcome of sequencing one release.
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    pub graph: TaskGraph,
    pub augmentation: Augmentation,
    /// Whether a signing key was available.
    pub signing: bool,
    pub repository_url: String,
}

/// Build, sign-gate and augment the task graph of an inventory.
///
/// Secrets are only used to decide whether signing is active and where the
/// artifacts go; the sequencer never sees them.
pub fn plan_release(
    inv: &InventoryFile,
    secrets: &impl SecretSource,
) -> std::result::Result<ReleasePlan, SequencerError> {
    let mut graph = TaskGraph::from_inventory(inv);

    let key = resolve_signing_key(secrets);
    if key.is_none() && inv.release.require_signing {
        return Err(SequencerError::ConfigError(
            "[release].require_signing is set but no signing key is configured".to_string(),
        ));
    }
    apply_signing_policy(&mut graph, key.as_ref())?;

    let options = SequencerOptions {
        scope: inv.sequencer.scope,
    };
    let (graph, augmentation) = augment(graph, &options)?;

    Ok(ReleasePlan {
        graph,
        augmentation,
        signing: key.is_some(),
        repository_url: repository_url(&inv.release.repository_base, secrets),
    })
}

/// High-level entry point used by `main.rs`.
///
/// Loads the inventory, resolves secrets (inventory properties first, then
/// the environment), augments the graph and prints the result.
pub fn run(args: CliArgs) -> Result<()> {
    let inv = load_and_validate(&args.inventory)?;

    if args.dry_run {
        print_dry_run(&inv);
        return Ok(());
    }

    let secrets = Layered::new(&inv.release.properties, ProcessEnv);
    let plan = plan_release(&inv, &secrets)?;
    info!(
        added = plan.augmentation.added(),
        signing = plan.signing,
        "release plan ready"
    );

    print!("{}", render_plan(&plan, args.order));
    Ok(())
}

/// Text report of a plan, as printed by `run`.
pub fn render_plan(plan: &ReleasePlan, with_order: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "pubseq plan");
    let _ = writeln!(
        out,
        "  signing: {}",
        if plan.signing { "enabled" } else { "disabled" }
    );
    let _ = writeln!(out, "  repository: {}", plan.repository_url);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "signer ordering ({}):",
        plan.augmentation.signer_edges.len()
    );
    for edge in plan.augmentation.signer_edges.iter() {
        let _ = writeln!(out, "  {edge}");
    }
    let _ = writeln!(
        out,
        "publisher ordering ({}):",
        plan.augmentation.publisher_edges.len()
    );
    for edge in plan.augmentation.publisher_edges.iter() {
        let _ = writeln!(out, "  {edge}");
    }

    if with_order {
        let _ = writeln!(out);
        let _ = writeln!(out, "execution order:");
        for (i, name) in plan.augmentation.order.iter().enumerate() {
            let _ = writeln!(out, "  {:>3}. {name}", i + 1);
        }
    }
    out
}

/// Dry-run output: print tasks with their resolved role and platform.
fn print_dry_run(inv: &InventoryFile) {
    let graph = TaskGraph::from_inventory(inv);

    println!("pubseq dry-run");
    println!("  sequencer.scope = {:?}", inv.sequencer.scope);
    println!("  sequencer.rules = {}", inv.classifier.rules().len());
    println!();

    println!("tasks ({}):", graph.task_count());
    for task in graph.tasks() {
        println!("  - {} [{}]", task.name, task.kind);
        if let Some(ref platform) = task.platform {
            println!("      platform: {platform}");
        }
        if let Some(ref artifact) = task.artifact {
            println!("      artifact: {artifact}");
        }
        let deps = graph.dependencies_of(&task.name);
        if !deps.is_empty() {
            println!("      after: {:?}", deps);
        }
    }

    debug!("dry-run complete (no augmentation)");
}
