// src/config/validate.rs

use crate::config::model::{InventoryFile, RawInventoryFile, SequencerSection};
use crate::errors::{Result, SequencerError};
use crate::roles::{RoleClassifier, RoleRule, default_rules};

impl TryFrom<RawInventoryFile> for InventoryFile {
    type Error = SequencerError;

    fn try_from(raw: RawInventoryFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_tasks(&raw)?;
        validate_task_dependencies(&raw)?;
        let classifier = build_classifier(&raw.sequencer)?;
        Ok(InventoryFile::new_unchecked(
            raw.sequencer,
            raw.release,
            raw.task,
            classifier,
        ))
    }
}

fn ensure_has_tasks(inv: &RawInventoryFile) -> Result<()> {
    if inv.task.is_empty() {
        return Err(SequencerError::ConfigError(
            "inventory must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_dependencies(inv: &RawInventoryFile) -> Result<()> {
    for (name, task) in inv.task.iter() {
        for dep in task.after.iter() {
            if dep == name {
                return Err(SequencerError::ConfigError(format!(
                    "task '{}' cannot depend on itself in `after`",
                    name
                )));
            }
            if !inv.task.contains_key(dep) {
                return Err(SequencerError::ConfigError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
        }
        if let Some(platform) = task.platform.as_deref() {
            if platform.trim().is_empty() {
                return Err(SequencerError::ConfigError(format!(
                    "task '{}' has an empty `platform`",
                    name
                )));
            }
        }
    }
    Ok(())
}

/// Configured rules first, then (optionally) the built-in ones.
fn build_classifier(section: &SequencerSection) -> Result<RoleClassifier> {
    let mut rules = section
        .rules
        .iter()
        .map(|r| RoleRule::new(r.kind, &r.pattern))
        .collect::<Result<Vec<_>>>()?;

    if section.use_default_rules {
        rules.extend(default_rules()?);
    }

    Ok(RoleClassifier::new(rules, section.normalize_platform))
}
