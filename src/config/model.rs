// src/config/model.rs

use serde::Deserialize;

use crate::engine::duration::{DEFAULT_DURATION_BASE, DEFAULT_LETTER_OFFSET};
use crate::engine::{LetterRank, SimulationOptions, DEFAULT_STALL_BOUND, DEFAULT_WORKERS};
use crate::types::CyclePolicy;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [simulation]
/// workers = 5
/// duration_base = 60
/// letter_offset = 64
/// stall_bound = 500
///
/// [graph]
/// on_cycle = "error"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Worker pool and duration settings from `[simulation]`.
    #[serde(default)]
    pub simulation: SimulationSection,

    /// Graph handling from `[graph]`.
    #[serde(default)]
    pub graph: GraphSection,
}

/// Validated configuration. Build it with `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub simulation: SimulationSection,
    pub graph: GraphSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(simulation: SimulationSection, graph: GraphSection) -> Self {
        Self { simulation, graph }
    }

    /// Worker pool settings for the parallel simulation.
    pub fn simulation_options(&self) -> SimulationOptions {
        SimulationOptions {
            workers: self.simulation.workers,
            stall_bound: self.simulation.stall_bound,
        }
    }

    /// Duration model described by `[simulation]`.
    pub fn duration_model(&self) -> LetterRank {
        LetterRank::new(self.simulation.duration_base, self.simulation.letter_offset)
    }

    /// Apply command-line overrides and validate the result again.
    pub fn with_overrides(self, overrides: &ConfigOverrides) -> crate::errors::Result<Self> {
        let mut raw = RawConfigFile::from(self);
        let sim = &mut raw.simulation;

        if let Some(workers) = overrides.workers {
            sim.workers = workers;
        }
        if let Some(base) = overrides.duration_base {
            sim.duration_base = base;
        }
        if let Some(offset) = overrides.letter_offset {
            sim.letter_offset = offset;
        }
        if let Some(bound) = overrides.stall_bound {
            sim.stall_bound = bound;
        }
        if let Some(policy) = overrides.on_cycle {
            raw.graph.on_cycle = policy;
        }

        ConfigFile::try_from(raw)
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(SimulationSection::default(), GraphSection::default())
    }
}

impl From<ConfigFile> for RawConfigFile {
    fn from(cfg: ConfigFile) -> Self {
        Self {
            simulation: cfg.simulation,
            graph: cfg.graph,
        }
    }
}

/// `[simulation]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationSection {
    /// Number of simulated workers. Must be >= 1.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Fixed cost added to every task's letter rank.
    #[serde(default = "default_duration_base")]
    pub duration_base: u64,

    /// Byte value subtracted from a task id's first byte to get its rank.
    ///
    /// The default of 64 gives `'A'` rank 1.
    #[serde(default = "default_letter_offset")]
    pub letter_offset: u8,

    /// Ticks without any assignment or completion before the simulation
    /// gives up. Must be >= 1.
    #[serde(default = "default_stall_bound")]
    pub stall_bound: u64,
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_duration_base() -> u64 {
    DEFAULT_DURATION_BASE
}

fn default_letter_offset() -> u8 {
    DEFAULT_LETTER_OFFSET
}

fn default_stall_bound() -> u64 {
    DEFAULT_STALL_BOUND
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            duration_base: default_duration_base(),
            letter_offset: default_letter_offset(),
            stall_bound: default_stall_bound(),
        }
    }
}

/// `[graph]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GraphSection {
    /// `"error"` (default) or `"warn"`.
    #[serde(default)]
    pub on_cycle: CyclePolicy,
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub workers: Option<usize>,
    pub duration_base: Option<u64>,
    pub letter_offset: Option<u8>,
    pub stall_bound: Option<u64>,
    pub on_cycle: Option<CyclePolicy>,
}
