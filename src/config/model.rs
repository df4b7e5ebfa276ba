// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::release::DEFAULT_REPOSITORY_BASE;
use crate::roles::RoleClassifier;
use crate::types::{ArtifactScope, TaskKind};

/// Inventory as read from a TOML file, before validation.
///
/// ```toml
/// [sequencer]
/// scope = "platform"
///
/// [[sequencer.rule]]
/// kind = "producer"
/// pattern = "^assemble(?P<platform>\\w+)$"
///
/// [release]
/// require_signing = true
///
/// [task.linkDebugTestMacosArm64]
/// after = ["compileKotlinMacosArm64"]
///
/// [task.compileKotlinMacosArm64]
/// ```
///
/// All sections except `[task.*]` are optional.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawInventoryFile {
    #[serde(default)]
    pub sequencer: SequencerSection,

    #[serde(default)]
    pub release: ReleaseSection,

    /// Keys are task names.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// A validated inventory with compiled role rules.
#[derive(Debug, Clone)]
pub struct InventoryFile {
    pub sequencer: SequencerSection,
    pub release: ReleaseSection,
    pub task: BTreeMap<String, TaskConfig>,
    pub classifier: RoleClassifier,
}

impl InventoryFile {
    pub(crate) fn new_unchecked(
        sequencer: SequencerSection,
        release: ReleaseSection,
        task: BTreeMap<String, TaskConfig>,
        classifier: RoleClassifier,
    ) -> Self {
        Self {
            sequencer,
            release,
            task,
            classifier,
        }
    }
}

/// `[sequencer]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SequencerSection {
    #[serde(default)]
    pub scope: ArtifactScope,

    /// Lowercase the first character of platform qualifiers before matching.
    #[serde(default = "default_true")]
    pub normalize_platform: bool,

    /// Append the built-in naming rules after the configured ones.
    #[serde(default = "default_true")]
    pub use_default_rules: bool,

    /// Name-pattern rules, tried in order (`[[sequencer.rule]]`).
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for SequencerSection {
    fn default() -> Self {
        Self {
            scope: ArtifactScope::default(),
            normalize_platform: true,
            use_default_rules: true,
            rules: Vec::new(),
        }
    }
}

/// One `[[sequencer.rule]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub kind: TaskKind,
    /// Regex over the task name; a `platform` capture group is optional.
    pub pattern: String,
}

/// `[release]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSection {
    #[serde(default = "default_repository_base")]
    pub repository_base: String,

    /// Fail instead of demoting signers when no signing key is available.
    #[serde(default)]
    pub require_signing: bool,

    /// Project properties; consulted before the environment.
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

fn default_repository_base() -> String {
    DEFAULT_REPOSITORY_BASE.to_string()
}

impl Default for ReleaseSection {
    fn default() -> Self {
        Self {
            repository_base: default_repository_base(),
            require_signing: false,
            properties: BTreeMap::new(),
        }
    }
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TaskConfig {
    /// Declared role; if `None`, the role rules decide.
    #[serde(default)]
    pub kind: Option<TaskKind>,

    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub artifact: Option<String>,

    /// Tasks this one runs after.
    #[serde(default)]
    pub after: Vec<String>,
}
