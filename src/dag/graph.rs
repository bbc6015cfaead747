// src/dag/graph.rs

use std::collections::HashMap;

use tracing::{debug, trace};

/// Canonical task id type used throughout the crate.
pub type TaskId = String;

/// Index of a node inside a [`TaskGraph`] arena.
pub type NodeIndex = usize;

/// A single precedence fact: `before` must complete before `after` starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precedence {
    pub before: TaskId,
    pub after: TaskId,
}

impl Precedence {
    pub fn new(before: impl Into<TaskId>, after: impl Into<TaskId>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// One task in the arena.
#[derive(Debug, Clone)]
pub struct TaskNode {
    id: TaskId,
    /// Tasks that depend on this one. One entry per fact, so repeated facts
    /// show up repeatedly.
    successors: Vec<NodeIndex>,
    /// Number of incoming edges recorded during construction.
    dependencies: u32,
}

impl TaskNode {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn successors(&self) -> &[NodeIndex] {
        &self.successors
    }

    /// Initial number of unresolved dependencies.
    pub fn dependencies(&self) -> u32 {
        self.dependencies
    }
}

/// In-memory task DAG.
///
/// Nodes live in an arena in first-reference order and edges are index
/// lists. Schedulers only borrow the arena and take a fresh
/// [`DependencyCounters`] table for each run.
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    nodes: Vec<TaskNode>,
    index: HashMap<TaskId, NodeIndex>,
}

impl TaskGraph {
    /// Build a graph from an ordered sequence of precedence facts.
    ///
    /// Each distinct id becomes exactly one node, created the first time it
    /// is referenced. For every fact `(P, S)` the successor list of `P`
    /// gains `S` and the dependency count of `S` grows by one.
    pub fn from_facts<'a, I>(facts: I) -> Self
    where
        I: IntoIterator<Item = &'a Precedence>,
    {
        let mut graph = TaskGraph::default();
        let mut edges = 0usize;

        for fact in facts {
            graph.connect(&fact.before, &fact.after);
            edges += 1;
        }

        debug!(
            tasks = graph.nodes.len(),
            edges,
            "built task graph from precedence facts"
        );
        graph
    }

    /// Add a task without any edges, or return the existing node for `id`.
    ///
    /// Isolated tasks cannot be expressed as precedence facts, so this is the
    /// only way to get one into the graph.
    pub fn add_task(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(TaskNode {
            id: id.to_string(),
            successors: Vec::new(),
            dependencies: 0,
        });
        self.index.insert(id.to_string(), idx);
        trace!(task = %id, idx, "created task node");
        idx
    }

    fn connect(&mut self, before: &str, after: &str) {
        let from = self.add_task(before);
        let to = self.add_task(after);
        self.nodes[from].successors.push(to);
        self.nodes[to].dependencies += 1;
    }

    /// Number of distinct tasks.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: NodeIndex) -> &TaskNode {
        &self.nodes[idx]
    }

    /// Look up a node index by task id.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Id of the node at `idx`.
    pub fn id_of(&self, idx: NodeIndex) -> &str {
        &self.nodes[idx].id
    }

    /// All task ids in first-reference order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// Iterate `(index, node)` pairs in first-reference order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &TaskNode)> {
        self.nodes.iter().enumerate()
    }

    /// Successor ids of a task (empty for unknown ids).
    pub fn successors_of(&self, id: &str) -> Vec<&str> {
        self.index_of(id)
            .map(|idx| {
                self.nodes[idx]
                    .successors
                    .iter()
                    .map(|&s| self.id_of(s))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Root set: every node without dependencies, in first-reference order.
    ///
    /// Schedulers must not rely on this order; they reorder through the
    /// eligible set.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.dependencies == 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Fresh per-run dependency counters for this graph.
    pub fn fresh_counters(&self) -> DependencyCounters {
        DependencyCounters {
            pending: self.nodes.iter().map(|n| n.dependencies).collect(),
        }
    }
}

/// Per-run table of unresolved dependency counts, indexed like the arena.
///
/// Counters only decrease, by one per resolved edge.
#[derive(Debug, Clone)]
pub struct DependencyCounters {
    pending: Vec<u32>,
}

impl DependencyCounters {
    pub fn pending(&self, idx: NodeIndex) -> u32 {
        self.pending[idx]
    }

    /// Record that one predecessor of `idx` completed.
    ///
    /// Returns `true` when this made the node eligible.
    pub fn resolve_one(&mut self, idx: NodeIndex) -> bool {
        let slot = &mut self.pending[idx];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        *slot == 0
    }

    /// Mark every successor edge of `node` as resolved and collect the
    /// successors that just became eligible.
    pub fn complete(&mut self, node: &TaskNode) -> Vec<NodeIndex> {
        node.successors
            .iter()
            .copied()
            .filter(|&succ| self.resolve_one(succ))
            .collect()
    }
}
