// src/engine/serial.rs

//! Deterministic serial schedule: Kahn's algorithm with a lexicographic
//! tie-break among eligible tasks.

use tracing::{debug, trace, warn};

use crate::dag::{EligibleSet, TaskGraph, TaskId};
use crate::errors::Result;

/// Result of a serial scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialSchedule {
    order: Vec<TaskId>,
    unvisited: Vec<TaskId>,
}

impl SerialSchedule {
    /// Visited task ids in visitation order.
    pub fn order(&self) -> &[TaskId] {
        &self.order
    }

    /// Concatenation of the visited ids, no separator.
    pub fn sequence(&self) -> String {
        self.order.concat()
    }

    /// Tasks that never became eligible. Only non-empty for cyclic input.
    pub fn unvisited(&self) -> &[TaskId] {
        &self.unvisited
    }

    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }
}

/// Visit every reachable task of `graph` in dependency order.
///
/// Runs on its own dependency counters, so the graph can be scheduled again
/// afterwards.
pub fn serial_order(graph: &TaskGraph) -> Result<SerialSchedule> {
    let mut counters = graph.fresh_counters();
    let mut eligible = EligibleSet::with_nodes(graph, graph.roots());
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::with_capacity(graph.len());

    while !eligible.is_empty() {
        let idx = eligible.pop_min()?;
        let node = graph.node(idx);
        trace!(task = %node.id(), "serial: visiting");

        eligible.extend(counters.complete(node));
        visited[idx] = true;
        order.push(node.id().to_string());
    }

    let unvisited: Vec<TaskId> = graph
        .nodes()
        .filter(|(idx, _)| !visited[*idx])
        .map(|(_, n)| n.id().to_string())
        .collect();

    if unvisited.is_empty() {
        debug!(visited = order.len(), "serial schedule complete");
    } else {
        warn!(
            visited = order.len(),
            unvisited = ?unvisited,
            "serial schedule stopped early; remaining tasks never became eligible"
        );
    }

    Ok(SerialSchedule { order, unvisited })
}
