// src/engine/mod.rs

//! Scheduling engine for simdag.
//!
//! Two independent consumers of a [`TaskGraph`](crate::dag::TaskGraph):
//! - [`serial`]: one global visitation order, smallest eligible id first;
//! - [`parallel`]: a tick-by-tick simulation of a worker pool that reports
//!   the makespan.
//!
//! Both take fresh dependency counters per run, so one graph can feed both
//! in any order.

pub mod duration;
pub mod parallel;
pub mod serial;
pub mod tick;
pub mod worker;

pub use duration::{DurationModel, LetterRank};
pub use parallel::{simulate, ParallelReport, Simulation};
pub use serial::{serial_order, SerialSchedule};
pub use tick::{TaskSpan, Termination, TickReport};
pub use worker::Worker;

pub const DEFAULT_WORKERS: usize = 5;
pub const DEFAULT_STALL_BOUND: u64 = 500;

/// Worker pool and termination settings for the parallel simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of simulated workers (at least 1).
    pub workers: usize,
    /// Consecutive ticks without an assignment or completion after which the
    /// simulation gives up.
    pub stall_bound: u64,
}

impl SimulationOptions {
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            stall_bound: DEFAULT_STALL_BOUND,
        }
    }
}
