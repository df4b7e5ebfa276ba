// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{InventoryFile, RawInventoryFile};
use crate::errors::Result;

/// Load an inventory file and return the raw, unvalidated model.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] for
/// reference checks and rule compilation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawInventoryFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let inventory: RawInventoryFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), tasks = inventory.task.len(), "loaded inventory");

    Ok(inventory)
}

/// Load an inventory and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for unknown or self `after` references and invalid rule
///   patterns.
///
/// Cycles are not rejected here: they are only fatal once the sequencer
/// has added its own edges, and are reported by
/// [`crate::sequencer::validate_acyclic`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<InventoryFile> {
    let raw = load_from_path(&path)?;
    InventoryFile::try_from(raw)
}
