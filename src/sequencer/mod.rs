// src/sequencer/mod.rs

//! Publication task sequencing.
//!
//! - [`ordering`] adds the signer and publisher ordering edges.
//! - [`acyclic`] proves the augmented graph still has a valid execution
//!   order.
//! - [`augment`] runs both passes plus validation as one pure step.

pub mod acyclic;
pub mod augment;
pub mod ordering;

pub use acyclic::validate_acyclic;
pub use augment::{Augmentation, SequencerOptions, augment};
pub use ordering::{compute_publisher_ordering, compute_signer_ordering};
