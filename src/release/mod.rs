// src/release/mod.rs

//! Release environment: where secrets come from, whether signing is
//! active, and which repository artifacts are staged to.
//!
//! The sequencer never reads secrets itself; callers resolve a
//! [`SigningKey`] here and apply [`apply_signing_policy`] to the graph
//! before augmentation.

pub mod repository;
pub mod secrets;
pub mod signing;

pub use repository::{DEFAULT_REPOSITORY_BASE, REPOSITORY_ID, repository_url};
pub use secrets::{Layered, ProcessEnv, SecretSource};
pub use signing::{SigningKey, apply_signing_policy, resolve_signing_key};
