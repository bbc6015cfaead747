// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod input;
pub mod logging;
pub mod types;

use std::fmt::Write as _;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{resolve_config, ConfigFile};
use crate::dag::{ensure_acyclic, TaskGraph};
use crate::engine::{serial_order, simulate, DurationModel, ParallelReport, SerialSchedule};
use crate::errors::SimdagError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::input::{load_facts, InputSource};
use crate::types::{CyclePolicy, ScheduleMode};

/// High-level entry point used by `main.rs`.
///
/// Returns the text to print on stdout.
pub fn run(args: &CliArgs) -> Result<String> {
    run_with(&RealFileSystem, args)
}

/// Same as [`run`], reading config and input through `fs`.
///
/// This wires together:
/// - config loading + CLI overrides
/// - input parsing and graph construction
/// - the cycle policy
/// - the serial and parallel schedulers
pub fn run_with(fs: &dyn FileSystem, args: &CliArgs) -> Result<String> {
    let cfg = resolve_config(fs, args.config.as_deref())?.with_overrides(&args.overrides())?;
    debug!(?cfg, "effective configuration");

    let source = InputSource::from_arg(&args.input);
    let facts = load_facts(&source, fs)?;
    let graph = TaskGraph::from_facts(&facts);

    if args.dry_run {
        return Ok(render_dry_run(&graph, &cfg));
    }

    let outcome = schedule(&graph, &cfg, args.mode)?;
    Ok(outcome.render())
}

/// Results of one invocation; a schedule is `None` when its mode was not
/// requested.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub serial: Option<SerialSchedule>,
    pub parallel: Option<ParallelReport>,
}

impl Outcome {
    /// Render the stdout text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(ref serial) = self.serial {
            let _ = writeln!(out, "Serial sequence: {}", serial.sequence());
        }
        if let Some(ref parallel) = self.parallel {
            let _ = writeln!(out, "Parallel time: {}", parallel.makespan);
        }
        out
    }
}

/// Apply the cycle policy, then run the requested schedulers on `graph`.
///
/// Each scheduler works on its own dependency counters.
pub fn schedule(graph: &TaskGraph, cfg: &ConfigFile, mode: ScheduleMode) -> errors::Result<Outcome> {
    check_cycles(graph, cfg.graph.on_cycle)?;

    let roots: Vec<&str> = graph.roots().into_iter().map(|r| graph.id_of(r)).collect();
    info!(tasks = graph.len(), ?roots, "scheduling task graph");

    let serial = if mode.wants_serial() {
        let schedule = serial_order(graph)?;
        info!(sequence = %schedule.sequence(), "serial schedule");
        Some(schedule)
    } else {
        None
    };

    let parallel = if mode.wants_parallel() {
        let options = cfg.simulation_options();
        let report = simulate(graph, cfg.duration_model(), options)?;
        info!(
            workers = options.workers,
            makespan = report.makespan,
            termination = ?report.termination,
            "parallel simulation"
        );
        for span in &report.timeline {
            debug!(
                task = %span.id,
                worker = span.worker,
                start = span.start,
                end = span.end,
                "task span"
            );
        }
        Some(report)
    } else {
        None
    };

    Ok(Outcome { serial, parallel })
}

fn check_cycles(graph: &TaskGraph, policy: CyclePolicy) -> errors::Result<()> {
    match ensure_acyclic(graph) {
        Ok(()) => Ok(()),
        Err(err @ SimdagError::DagCycle(_)) if policy == CyclePolicy::Warn => {
            warn!(error = %err, "input graph has a cycle; scheduling anyway (on_cycle = warn)");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Dry-run output: tasks, successors, roots and durations.
fn render_dry_run(graph: &TaskGraph, cfg: &ConfigFile) -> String {
    let durations = cfg.duration_model();
    let mut out = String::new();

    let _ = writeln!(out, "simdag dry-run");
    let _ = writeln!(out, "  simulation.workers = {}", cfg.simulation.workers);
    let _ = writeln!(out, "  simulation.duration_base = {}", cfg.simulation.duration_base);
    let _ = writeln!(out, "  simulation.letter_offset = {}", cfg.simulation.letter_offset);
    let _ = writeln!(out, "  simulation.stall_bound = {}", cfg.simulation.stall_bound);
    let _ = writeln!(out, "  graph.on_cycle = {:?}", cfg.graph.on_cycle);
    let _ = writeln!(out);

    let mut ids: Vec<&str> = graph.tasks().collect();
    ids.sort_unstable();

    let _ = writeln!(out, "tasks ({}):", ids.len());
    for id in ids {
        let _ = writeln!(out, "  - {id}");
        let _ = writeln!(out, "      duration: {}", durations.duration_of(id));
        let successors = graph.successors_of(id);
        if !successors.is_empty() {
            let _ = writeln!(out, "      before: {:?}", successors);
        }
    }

    let mut roots: Vec<&str> = graph.roots().into_iter().map(|r| graph.id_of(r)).collect();
    roots.sort_unstable();
    let _ = writeln!(out, "roots: {:?}", roots);

    debug!("dry-run complete (no scheduling)");
    out
}
