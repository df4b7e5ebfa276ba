// src/config/mod.rs

//! Inventory loading and validation for pubseq.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load an inventory file from disk (`loader.rs`).
//! - Validate references and compile role rules (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{
    InventoryFile, RawInventoryFile, ReleaseSection, RuleConfig, SequencerSection, TaskConfig,
};
