// src/dag/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::dag::graph::TaskGraph;
use crate::errors::{Result, SimdagError};

/// Check that the graph has no cycles.
///
/// Edge direction matches the precedence facts: for "A before B" there is
/// an edge A -> B. Repeated facts collapse into one edge, which does not
/// change acyclicity.
pub fn ensure_acyclic(graph: &TaskGraph) -> Result<()> {
    let mut dg: DiGraphMap<&str, ()> = DiGraphMap::new();

    for id in graph.tasks() {
        dg.add_node(id);
    }

    for (_, node) in graph.nodes() {
        for &succ in node.successors() {
            dg.add_edge(node.id(), graph.id_of(succ), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&dg, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(SimdagError::DagCycle(format!(
            "cycle detected in task DAG involving task '{}'",
            cycle.node_id()
        ))),
    }
}
