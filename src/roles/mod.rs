// src/roles/mod.rs

//! Role classification for tasks.
//!
//! Tasks may declare their kind and platform directly in the inventory.
//! Tasks that don't are matched against an ordered list of name patterns
//! ([`RoleRule`]); a named `platform` capture group supplies the platform
//! qualifier.

pub mod rules;

pub use rules::{RoleClassifier, RoleRule, default_rules, normalize_platform};
