use serde::Deserialize;

/// What to do when the precedence graph turns out to contain a cycle.
///
/// - `Error`: abort before scheduling anything (default behaviour).
/// - `Warn`: log a warning and schedule anyway. Tasks on or behind the cycle
///   never become eligible, so both schedulers under-produce and report the
///   ids they could not reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    Error,
    Warn,
}

impl Default for CyclePolicy {
    fn default() -> Self {
        CyclePolicy::Error
    }
}

/// Which schedules the driver computes and prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScheduleMode {
    /// Serial order and parallel makespan.
    Both,
    Serial,
    Parallel,
}

impl Default for ScheduleMode {
    fn default() -> Self {
        ScheduleMode::Both
    }
}

impl ScheduleMode {
    pub fn wants_serial(self) -> bool {
        matches!(self, ScheduleMode::Both | ScheduleMode::Serial)
    }

    pub fn wants_parallel(self) -> bool {
        matches!(self, ScheduleMode::Both | ScheduleMode::Parallel)
    }
}
