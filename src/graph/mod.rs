// src/graph/mod.rs

//! Task graph representation.
//!
//! - [`task`] holds the typed task metadata and the edge type.
//! - [`task_graph`] holds the deduplicated edge set over a task inventory.
//! - [`binding`] derives the artifact/platform relation used during
//!   augmentation.

pub mod binding;
pub mod task;
pub mod task_graph;

pub use binding::{ArtifactBinding, Bindings, bind_artifacts};
pub use task::{Edge, Task, TaskName};
pub use task_graph::TaskGraph;
