use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use simdag::dag::{Precedence, TaskGraph};
use simdag::engine::{serial_order, simulate, DurationModel, LetterRank, SimulationOptions};

const NAMES: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

fn durations() -> LetterRank {
    LetterRank::new(0, 64)
}

// Strategy to generate a valid DAG as precedence facts.
// We ensure acyclicity by only allowing an edge from position i to position
// j when i < j, then hand out names through a shuffle so that id order and
// topological order are unrelated.
fn dag_facts_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Precedence>> {
    (2..=max_tasks).prop_flat_map(|num_tasks| {
        let names = Just(NAMES[..num_tasks].to_vec()).prop_shuffle();
        let edges = proptest::collection::vec((0..num_tasks, 0..num_tasks), 1..num_tasks * 3);

        (names, edges).prop_map(|(names, edges)| {
            edges
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| {
                    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                    Precedence::new(names[lo], names[hi])
                })
                .collect()
        })
    })
}

fn facts_and_shuffled() -> impl Strategy<Value = (Vec<Precedence>, Vec<Precedence>)> {
    dag_facts_strategy(10).prop_flat_map(|facts| {
        let shuffled = Just(facts.clone()).prop_shuffle();
        (Just(facts), shuffled)
    })
}

/// Longest chain of durations through the graph.
fn critical_path(graph: &TaskGraph, facts: &[Precedence]) -> u64 {
    let order = serial_order(graph).unwrap();
    let model = durations();

    let mut preds: HashMap<&str, Vec<&str>> = HashMap::new();
    for f in facts {
        preds.entry(f.after.as_str()).or_default().push(f.before.as_str());
    }

    let mut finish: HashMap<&str, u64> = HashMap::new();
    for id in order.order() {
        let ready = preds
            .get(id.as_str())
            .map(|ps| ps.iter().map(|p| finish[p]).max().unwrap_or(0))
            .unwrap_or(0);
        finish.insert(id.as_str(), ready + model.duration_of(id));
    }

    finish.values().copied().max().unwrap_or(0)
}

proptest! {
    #[test]
    fn serial_visits_every_task_once_in_dependency_order(facts in dag_facts_strategy(12)) {
        let graph = TaskGraph::from_facts(&facts);
        let schedule = serial_order(&graph).unwrap();

        prop_assert!(schedule.is_complete());
        prop_assert_eq!(schedule.order().len(), graph.len());

        let unique: HashSet<&String> = schedule.order().iter().collect();
        prop_assert_eq!(unique.len(), graph.len());

        let position: HashMap<&str, usize> = schedule
            .order()
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        for f in &facts {
            prop_assert!(
                position[f.before.as_str()] < position[f.after.as_str()],
                "{} must come before {}", f.before, f.after
            );
        }
    }

    #[test]
    fn fact_order_does_not_change_results((facts, shuffled) in facts_and_shuffled()) {
        let a = TaskGraph::from_facts(&facts);
        let b = TaskGraph::from_facts(&shuffled);

        prop_assert_eq!(
            serial_order(&a).unwrap().sequence(),
            serial_order(&b).unwrap().sequence()
        );

        let opts = SimulationOptions::with_workers(3);
        prop_assert_eq!(
            simulate(&a, durations(), opts).unwrap().makespan,
            simulate(&b, durations(), opts).unwrap().makespan
        );
    }

    #[test]
    fn makespan_is_bounded_by_critical_path_and_serial_sum(
        facts in dag_facts_strategy(10),
        workers in 1usize..6,
    ) {
        let graph = TaskGraph::from_facts(&facts);
        let report = simulate(&graph, durations(), SimulationOptions::with_workers(workers)).unwrap();

        let model = durations();
        let serial_sum: u64 = graph.tasks().map(|id| model.duration_of(id)).sum();
        let lower = critical_path(&graph, &facts);

        prop_assert!(report.incomplete.is_empty());
        prop_assert!(report.makespan >= lower);
        prop_assert!(report.makespan <= serial_sum);
    }

    #[test]
    fn enough_workers_reach_the_critical_path(facts in dag_facts_strategy(10), extra in 0usize..4) {
        let graph = TaskGraph::from_facts(&facts);
        let workers = graph.len() + extra;
        let report = simulate(&graph, durations(), SimulationOptions::with_workers(workers)).unwrap();

        prop_assert_eq!(report.makespan, critical_path(&graph, &facts));
    }

    #[test]
    fn one_worker_runs_the_serial_order(facts in dag_facts_strategy(10)) {
        let graph = TaskGraph::from_facts(&facts);
        let serial = serial_order(&graph).unwrap();
        let report = simulate(&graph, durations(), SimulationOptions::with_workers(1)).unwrap();

        let model = durations();
        let expected: u64 = serial.order().iter().map(|id| model.duration_of(id)).sum();
        prop_assert_eq!(report.makespan, expected);
        prop_assert_eq!(&report.completion_order[..], serial.order());
    }

    #[test]
    fn simulation_is_idempotent(facts in dag_facts_strategy(10), workers in 1usize..6) {
        let graph = TaskGraph::from_facts(&facts);
        let opts = SimulationOptions::with_workers(workers);

        let first = simulate(&graph, durations(), opts).unwrap();
        let second = simulate(&graph, durations(), opts).unwrap();
        prop_assert_eq!(first.makespan, second.makespan);
        prop_assert_eq!(first.timeline, second.timeline);
    }
}
