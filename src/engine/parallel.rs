// src/engine/parallel.rs

//! Discrete-time simulation of a fixed worker pool.
//!
//! Every tick runs three phases in this order:
//!
//! 1. assignment: idle workers take eligible tasks, smallest id first;
//! 2. advance: every busy worker loses one tick of remaining time;
//! 3. completion: workers that ran out of time release their task, which
//!    resolves one dependency on each successor.
//!
//! A task that becomes eligible during the completion phase is picked up in
//! the next tick's assignment phase at the earliest.

use tracing::{debug, trace, warn};

use crate::dag::{DependencyCounters, EligibleSet, NodeIndex, TaskGraph, TaskId};
use crate::engine::duration::DurationModel;
use crate::engine::tick::{TaskSpan, Termination, TickReport};
use crate::engine::worker::Worker;
use crate::engine::SimulationOptions;
use crate::errors::Result;

/// Outcome of a full simulation run.
#[derive(Debug, Clone)]
pub struct ParallelReport {
    /// Tick at which the last task finished, i.e. last completion tick + 1.
    /// Zero when nothing ever completed.
    pub makespan: u64,
    /// Task ids in completion order (worker order within a tick).
    pub completion_order: Vec<TaskId>,
    /// Per-task worker occupancy, in completion order.
    pub timeline: Vec<TaskSpan>,
    /// Number of ticks the clock advanced.
    pub ticks: u64,
    pub termination: Termination,
    /// Tasks that never completed. Only non-empty for cyclic input or a
    /// stalled run.
    pub incomplete: Vec<TaskId>,
}

/// Per-run simulation state.
///
/// Owns its dependency counters and eligible set; the graph is only read.
pub struct Simulation<'g, D> {
    graph: &'g TaskGraph,
    durations: D,
    options: SimulationOptions,
    counters: DependencyCounters,
    eligible: EligibleSet<'g>,
    workers: Vec<Worker>,
    clock: u64,
    latest_completion: Option<u64>,
    idle_ticks: u64,
    done: Vec<bool>,
    completion_order: Vec<TaskId>,
    timeline: Vec<TaskSpan>,
    termination: Option<Termination>,
}

impl<'g, D: DurationModel> Simulation<'g, D> {
    pub fn new(graph: &'g TaskGraph, durations: D, options: SimulationOptions) -> Self {
        let worker_count = options.workers.max(1);

        if let Some((id, longest)) = graph
            .tasks()
            .map(|id| (id, durations.duration_of(id)))
            .max_by_key(|(_, d)| *d)
        {
            if longest >= options.stall_bound {
                warn!(
                    task = %id,
                    duration = longest,
                    stall_bound = options.stall_bound,
                    "task duration reaches the stall bound; the simulation may stop before it completes"
                );
            }
        }

        Self {
            graph,
            durations,
            options,
            counters: graph.fresh_counters(),
            eligible: EligibleSet::with_nodes(graph, graph.roots()),
            workers: vec![Worker::idle(); worker_count],
            clock: 0,
            latest_completion: None,
            idle_ticks: 0,
            done: vec![false; graph.len()],
            completion_order: Vec::new(),
            timeline: Vec::new(),
            termination: None,
        }
    }

    /// Current clock value (number of ticks simulated so far).
    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn eligible_len(&self) -> usize {
        self.eligible.len()
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// Makespan observed so far.
    pub fn makespan(&self) -> u64 {
        self.latest_completion.map(|t| t + 1).unwrap_or(0)
    }

    fn busy_workers(&self) -> usize {
        self.workers.iter().filter(|w| !w.is_idle()).count()
    }

    fn is_quiescent(&self) -> bool {
        self.eligible.is_empty() && self.busy_workers() == 0
    }

    /// Run one tick. Once the simulation has terminated this is a no-op that
    /// returns an empty report.
    pub fn step(&mut self) -> Result<TickReport> {
        let tick = self.clock;
        let mut report = TickReport {
            tick,
            ..TickReport::default()
        };

        if self.termination.is_some() {
            return Ok(report);
        }

        if self.is_quiescent() {
            self.finish(Termination::Quiescent);
            report.sim_just_finished = true;
            return Ok(report);
        }

        // Assignment phase. Consumes no simulated time.
        while !self.eligible.is_empty() {
            let Some(slot) = self.workers.iter().position(Worker::is_idle) else {
                break;
            };
            let idx = self.eligible.pop_min()?;
            let id = self.graph.id_of(idx);
            let duration = self.durations.duration_of(id);
            self.workers[slot].assign(idx, duration, tick);
            trace!(task = %id, worker = slot, tick, duration, "assigned task");
            report.assigned.push(id.to_string());
        }

        for worker in self.workers.iter_mut() {
            worker.advance();
        }

        // Completion phase, in worker order.
        for slot in 0..self.workers.len() {
            let Some((idx, start)) = self.workers[slot].take_finished() else {
                continue;
            };
            let newly = self.complete_task(idx, slot, start, tick);
            report.completed.push(self.graph.id_of(idx).to_string());
            report
                .newly_eligible
                .extend(newly.into_iter().map(|n| self.graph.id_of(n).to_string()));
        }

        self.clock += 1;

        if report.assigned.is_empty() && report.completed.is_empty() {
            self.idle_ticks += 1;
        } else {
            self.idle_ticks = 0;
        }

        if self.is_quiescent() {
            self.finish(Termination::Quiescent);
            report.sim_just_finished = true;
        } else if self.idle_ticks >= self.options.stall_bound {
            warn!(
                tick,
                stall_bound = self.options.stall_bound,
                in_flight = self.busy_workers(),
                "simulation stalled; stopping"
            );
            self.finish(Termination::Stalled);
            report.sim_just_finished = true;
        }

        Ok(report)
    }

    fn complete_task(&mut self, idx: NodeIndex, worker: usize, start: u64, tick: u64) -> Vec<NodeIndex> {
        let graph = self.graph;
        let node = graph.node(idx);
        trace!(task = %node.id(), worker, tick, "task completed");

        self.latest_completion = Some(tick);
        self.done[idx] = true;
        self.completion_order.push(node.id().to_string());
        self.timeline.push(TaskSpan {
            id: node.id().to_string(),
            worker,
            start,
            end: tick + 1,
        });

        let newly = self.counters.complete(node);
        self.eligible.extend(newly.iter().copied());
        newly
    }

    fn finish(&mut self, termination: Termination) {
        debug!(
            ?termination,
            ticks = self.clock,
            makespan = self.makespan(),
            "simulation finished"
        );
        self.termination = Some(termination);
    }

    /// Step until the simulation terminates and return the final report.
    pub fn run(mut self) -> Result<ParallelReport> {
        while self.termination.is_none() {
            self.step()?;
        }

        let incomplete: Vec<TaskId> = self
            .graph
            .nodes()
            .filter(|(idx, _)| !self.done[*idx])
            .map(|(_, n)| n.id().to_string())
            .collect();

        if !incomplete.is_empty() {
            warn!(
                incomplete = ?incomplete,
                "parallel simulation ended with tasks that never completed"
            );
        }

        Ok(ParallelReport {
            makespan: self.makespan(),
            completion_order: self.completion_order,
            timeline: self.timeline,
            ticks: self.clock,
            termination: self.termination.unwrap_or(Termination::Quiescent),
            incomplete,
        })
    }
}

/// Simulate `graph` on `options.workers` workers and report the makespan.
pub fn simulate<D: DurationModel>(
    graph: &TaskGraph,
    durations: D,
    options: SimulationOptions,
) -> Result<ParallelReport> {
    Simulation::new(graph, durations, options).run()
}
