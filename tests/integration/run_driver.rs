// tests/integration/run_driver.rs

use simdag::cli::parse_from;
use simdag::fs::mock::MockFileSystem;
use simdag::run_with;
use simdag::schedule;
use simdag::types::ScheduleMode;
use simdag_test_utils::builders::{ConfigFileBuilder, FactsBuilder, SAMPLE_FACTS};
use simdag_test_utils::init_tracing;

fn sample_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("facts.txt", FactsBuilder::from_pairs(SAMPLE_FACTS).to_input());
    fs
}

#[test]
fn default_run_prints_both_schedules() {
    init_tracing();

    let args = parse_from(["simdag", "--input", "facts.txt"]);
    let out = run_with(&sample_fs(), &args).unwrap();

    assert_eq!(out, "Serial sequence: CABDFE\nParallel time: 253\n");
}

#[test]
fn cli_flags_override_the_config_file() {
    let fs = sample_fs();
    fs.add_file("sim.toml", "[simulation]\nworkers = 9\nduration_base = 30\n");

    let args = parse_from([
        "simdag",
        "--input",
        "facts.txt",
        "--config",
        "sim.toml",
        "--workers",
        "2",
        "--duration-base",
        "0",
        "--mode",
        "parallel",
    ]);
    let out = run_with(&fs, &args).unwrap();

    assert_eq!(out, "Parallel time: 15\n");
}

#[test]
fn serial_mode_prints_only_the_sequence() {
    let args = parse_from(["simdag", "--input", "facts.txt", "--mode", "serial"]);
    let out = run_with(&sample_fs(), &args).unwrap();

    assert_eq!(out, "Serial sequence: CABDFE\n");
}

#[test]
fn dry_run_lists_tasks_without_scheduling() {
    let args = parse_from(["simdag", "--input", "facts.txt", "--dry-run"]);
    let out = run_with(&sample_fs(), &args).unwrap();

    assert!(out.starts_with("simdag dry-run"));
    assert!(out.contains("tasks (6):"));
    assert!(out.contains("  - C\n      duration: 63\n      before: [\"A\", \"F\"]"));
    assert!(out.contains("roots: [\"C\"]"));
    assert!(!out.contains("Serial sequence"));
}

#[test]
fn malformed_input_aborts_without_output() {
    let fs = MockFileSystem::new();
    fs.add_file("bad.txt", "Step C must be finished before step A can begin.\nStep B\n");

    let args = parse_from(["simdag", "--input", "bad.txt"]);
    let err = run_with(&fs, &args).unwrap_err();

    assert!(err.to_string().contains("line 2"));
}

#[test]
fn schedule_respects_mode() {
    let graph = FactsBuilder::from_pairs(SAMPLE_FACTS).graph();
    let cfg = ConfigFileBuilder::new().build();

    let outcome = schedule(&graph, &cfg, ScheduleMode::Serial).unwrap();
    assert!(outcome.serial.is_some());
    assert!(outcome.parallel.is_none());
    assert_eq!(outcome.render(), "Serial sequence: CABDFE\n");
}
