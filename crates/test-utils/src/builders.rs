#![allow(dead_code)]

use simdag::config::{ConfigFile, GraphSection, RawConfigFile, SimulationSection};
use simdag::dag::{Precedence, TaskGraph};
use simdag::types::CyclePolicy;

/// The seven-fact graph used throughout the tests:
///
/// ```text
///   -->A--->B--
///  /    \      \
/// C      -->D----->E
///  \           /
///   ---->F-----
/// ```
pub const SAMPLE_FACTS: &[(&str, &str)] = &[
    ("C", "A"),
    ("C", "F"),
    ("A", "B"),
    ("A", "D"),
    ("B", "E"),
    ("D", "E"),
    ("F", "E"),
];

/// Builder for precedence facts, rendered either as values or as input text.
#[derive(Debug, Clone, Default)]
pub struct FactsBuilder {
    facts: Vec<Precedence>,
}

impl FactsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .fold(Self::new(), |b, (before, after)| b.before(before, after))
    }

    /// `before` must finish before `after` can begin.
    pub fn before(mut self, before: &str, after: &str) -> Self {
        self.facts.push(Precedence::new(before, after));
        self
    }

    pub fn build(self) -> Vec<Precedence> {
        self.facts
    }

    pub fn graph(&self) -> TaskGraph {
        TaskGraph::from_facts(&self.facts)
    }

    /// Input text, one record per line.
    pub fn to_input(&self) -> String {
        self.facts
            .iter()
            .map(|f| record_line(&f.before, &f.after))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One well-formed input record.
pub fn record_line(before: &str, after: &str) -> String {
    format!("Step {before} must be finished before step {after} can begin.")
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                simulation: SimulationSection::default(),
                graph: GraphSection::default(),
            },
        }
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.config.simulation.workers = workers;
        self
    }

    pub fn duration_base(mut self, base: u64) -> Self {
        self.config.simulation.duration_base = base;
        self
    }

    pub fn letter_offset(mut self, offset: u8) -> Self {
        self.config.simulation.letter_offset = offset;
        self
    }

    pub fn stall_bound(mut self, bound: u64) -> Self {
        self.config.simulation.stall_bound = bound;
        self
    }

    pub fn on_cycle(mut self, policy: CyclePolicy) -> Self {
        self.config.graph.on_cycle = policy;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
