// src/dag/eligible.rs

//! Min-priority set of eligible tasks, ordered by task id.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::dag::graph::{NodeIndex, TaskGraph};
use crate::errors::{Result, SimdagError};

/// Heap entry. Ordering is by id (byte order), then by arena index so that
/// entries with equal ids still have a total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Entry<'g> {
    id: &'g str,
    idx: NodeIndex,
}

/// Eligible tasks of one scheduling run.
///
/// Backed by a binary heap: `push` and `pop_min` are `O(log n)` in the number
/// of currently eligible tasks.
#[derive(Debug)]
pub struct EligibleSet<'g> {
    graph: &'g TaskGraph,
    heap: BinaryHeap<Reverse<Entry<'g>>>,
}

impl<'g> EligibleSet<'g> {
    pub fn new(graph: &'g TaskGraph) -> Self {
        Self {
            graph,
            heap: BinaryHeap::new(),
        }
    }

    /// Eligible set seeded with the given nodes (usually the root set).
    pub fn with_nodes(graph: &'g TaskGraph, nodes: impl IntoIterator<Item = NodeIndex>) -> Self {
        let mut set = Self::new(graph);
        set.extend(nodes);
        set
    }

    pub fn push(&mut self, idx: NodeIndex) {
        let id = self.graph.id_of(idx);
        self.heap.push(Reverse(Entry { id, idx }));
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = NodeIndex>) {
        for idx in nodes {
            self.push(idx);
        }
    }

    /// Remove and return the eligible task with the smallest id.
    pub fn pop_min(&mut self) -> Result<NodeIndex> {
        self.heap
            .pop()
            .map(|Reverse(entry)| entry.idx)
            .ok_or(SimdagError::EmptyPop)
    }

    /// Smallest eligible id without removing it.
    pub fn peek_min(&self) -> Option<&'g str> {
        self.heap.peek().map(|Reverse(entry)| entry.id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
