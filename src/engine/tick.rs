// src/engine/tick.rs

//! Step-by-step result types for the parallel simulation.

use crate::dag::TaskId;

/// Structured result of a single simulated tick.
///
/// This is useful for tests that want to manually step the clock and make
/// assertions about what changed.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Clock value this tick ran at.
    pub tick: u64,
    /// Tasks handed to a worker during the assignment phase.
    pub assigned: Vec<TaskId>,
    /// Tasks whose worker ran out of time during this tick.
    pub completed: Vec<TaskId>,
    /// Tasks that became eligible because of this tick's completions.
    pub newly_eligible: Vec<TaskId>,
    /// Whether the simulation terminated at the end of this step.
    pub sim_just_finished: bool,
}

/// Why a simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Nothing in flight and nothing eligible.
    Quiescent,
    /// No assignment or completion happened for `stall_bound` ticks.
    Stalled,
}

/// One task's stay on a worker. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpan {
    pub id: TaskId,
    pub worker: usize,
    pub start: u64,
    pub end: u64,
}
