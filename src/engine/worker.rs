// src/engine/worker.rs

use crate::dag::NodeIndex;

/// One simulated worker.
///
/// A worker is idle exactly when it holds no task. Remaining time is only
/// meaningful while busy.
#[derive(Debug, Clone, Default)]
pub struct Worker {
    remaining: u64,
    task: Option<NodeIndex>,
    started_at: u64,
}

impl Worker {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.task.is_none()
    }

    pub fn current_task(&self) -> Option<NodeIndex> {
        self.task
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Start `task` at `tick`. A zero duration still occupies one tick.
    pub fn assign(&mut self, task: NodeIndex, duration: u64, tick: u64) {
        self.task = Some(task);
        self.remaining = duration.max(1);
        self.started_at = tick;
    }

    /// Advance the clock by one tick for this worker.
    pub fn advance(&mut self) {
        if self.task.is_some() && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// If the current task just ran out of time, release it and return it
    /// together with its start tick.
    pub fn take_finished(&mut self) -> Option<(NodeIndex, u64)> {
        if self.remaining == 0 {
            self.task.take().map(|task| (task, self.started_at))
        } else {
            None
        }
    }
}
