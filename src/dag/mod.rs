// src/dag/mod.rs

//! DAG representation.
//!
//! - [`graph`] holds the task arena built from precedence facts, plus the
//!   per-run dependency counters.
//! - [`eligible`] is the id-ordered set of tasks whose dependencies are all
//!   resolved.
//! - [`validate`] checks acyclicity before scheduling.

pub mod eligible;
pub mod graph;
pub mod validate;

pub use eligible::EligibleSet;
pub use graph::{DependencyCounters, NodeIndex, Precedence, TaskGraph, TaskId, TaskNode};
pub use validate::ensure_acyclic;
