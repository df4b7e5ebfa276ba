// src/roles/rules.rs

use regex::Regex;
use tracing::trace;

use crate::errors::{Result, SequencerError};
use crate::types::TaskKind;

/// Name of the capture group that carries the platform qualifier.
const PLATFORM_GROUP: &str = "platform";

/// Naming conventions of a Kotlin Multiplatform release build:
///
/// - `linkDebugTestMacosArm64`, `linkWorkerTestDebugTestMacosArm64`,
///   `compileTestKotlinMacosArm64` produce artifacts,
/// - `signMacosArm64Publication` signs them,
/// - `publishMacosArm64PublicationToMavenLocal` (and friends) publish.
const DEFAULT_RULES: &[(TaskKind, &str)] = &[
    (
        TaskKind::Producer,
        r"^(?:linkDebugTest|linkWorkerTestDebugTest|compileTestKotlin)(?P<platform>\w+)$",
    ),
    (TaskKind::Signer, r"^sign(?P<platform>\w+)Publication$"),
    (
        TaskKind::Publisher,
        r"^publish(?P<platform>\w+?)Publications?To\w+$",
    ),
];

/// A single name pattern mapped to a task kind.
#[derive(Debug, Clone)]
pub struct RoleRule {
    pub kind: TaskKind,
    pattern: Regex,
}

impl RoleRule {
    pub fn new(kind: TaskKind, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| SequencerError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { kind, pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// `None` if the name does not match; otherwise the captured platform.
    /// A missing or blank `platform` capture leaves the task without one.
    pub fn capture(&self, name: &str) -> Option<Option<String>> {
        let caps = self.pattern.captures(name)?;
        let platform = caps
            .name(PLATFORM_GROUP)
            .map(|m| m.as_str().trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Some(platform)
    }
}

/// Compile the built-in rules.
pub fn default_rules() -> Result<Vec<RoleRule>> {
    DEFAULT_RULES
        .iter()
        .map(|(kind, pattern)| RoleRule::new(*kind, pattern))
        .collect()
}

/// Lowercase the first character: `MacosArm64` -> `macosArm64`.
pub fn normalize_platform(platform: &str) -> String {
    let mut chars = platform.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordered rule list plus platform normalisation policy.
#[derive(Debug, Clone)]
pub struct RoleClassifier {
    rules: Vec<RoleRule>,
    normalize: bool,
}

impl RoleClassifier {
    pub fn new(rules: Vec<RoleRule>, normalize: bool) -> Self {
        Self { rules, normalize }
    }

    /// Built-in rules with platform normalisation on.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(default_rules()?, true))
    }

    pub fn rules(&self) -> &[RoleRule] {
        &self.rules
    }

    /// Resolve the kind and platform of a task.
    ///
    /// Declared values win. A declared kind only borrows a captured platform
    /// from a rule of the same kind. First matching rule wins; no match
    /// means [`TaskKind::Other`].
    pub fn classify(
        &self,
        name: &str,
        declared_kind: Option<TaskKind>,
        declared_platform: Option<&str>,
    ) -> (TaskKind, Option<String>) {
        let matched = self
            .rules
            .iter()
            .filter(|r| declared_kind.is_none_or(|k| k == r.kind))
            .find_map(|r| r.capture(name).map(|platform| (r.kind, platform)));

        let kind = declared_kind
            .or(matched.as_ref().map(|(k, _)| *k))
            .unwrap_or_default();

        let platform = declared_platform
            .map(str::to_string)
            .or_else(|| matched.and_then(|(_, p)| p))
            .map(|p| if self.normalize { normalize_platform(&p) } else { p });

        trace!(task = name, %kind, ?platform, "classified task");
        (kind, platform)
    }
}
