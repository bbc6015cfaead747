// tests/integration/config_loading.rs

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use simdag::config::{load_and_validate, resolve_config, ConfigFile, ConfigOverrides};
use simdag::engine::LetterRank;
use simdag::errors::SimdagError;
use simdag::fs::mock::MockFileSystem;
use simdag::types::CyclePolicy;
use simdag_test_utils::builders::ConfigFileBuilder;

#[test]
fn full_config_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[simulation]
workers = 2
duration_base = 0
letter_offset = 64
stall_bound = 50

[graph]
on_cycle = "warn"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.simulation.workers, 2);
    assert_eq!(cfg.simulation.stall_bound, 50);
    assert_eq!(cfg.graph.on_cycle, CyclePolicy::Warn);
    assert_eq!(cfg.duration_model(), LetterRank::new(0, 64));
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[simulation]\nworkers = 3\n").unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.simulation.workers, 3);
    assert_eq!(cfg.simulation.duration_base, 60);
    assert_eq!(cfg.simulation.stall_bound, 500);
    assert_eq!(cfg.graph.on_cycle, CyclePolicy::Error);
}

#[test]
fn zero_workers_is_rejected() {
    let result = ConfigFile::try_from(ConfigFileBuilder::new().workers(0).raw());

    match result {
        Err(SimdagError::ConfigError(msg)) => assert!(msg.contains("workers must be >= 1")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn zero_stall_bound_is_rejected() {
    let result = ConfigFile::try_from(ConfigFileBuilder::new().stall_bound(0).raw());
    assert!(matches!(result, Err(SimdagError::ConfigError(_))));
}

#[test]
fn unknown_cycle_policy_fails_to_parse() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[graph]\non_cycle = \"ignore\"\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(SimdagError::TomlError(_))
    ));
}

#[test]
fn overrides_replace_file_values_and_are_validated() {
    let cfg = ConfigFileBuilder::new().workers(4).build();

    let overridden = cfg
        .clone()
        .with_overrides(&ConfigOverrides {
            workers: Some(2),
            duration_base: Some(0),
            ..ConfigOverrides::default()
        })
        .unwrap();
    assert_eq!(overridden.simulation.workers, 2);
    assert_eq!(overridden.simulation.duration_base, 0);
    assert_eq!(overridden.simulation.stall_bound, 500);

    let invalid = cfg.with_overrides(&ConfigOverrides {
        workers: Some(0),
        ..ConfigOverrides::default()
    });
    assert!(matches!(invalid, Err(SimdagError::ConfigError(_))));
}

#[test]
fn resolve_uses_defaults_without_any_file() {
    let fs = MockFileSystem::new();
    let cfg = resolve_config(&fs, None).unwrap();

    assert_eq!(cfg.simulation.workers, 5);
    assert_eq!(cfg.duration_model(), LetterRank::default());
}

#[test]
fn resolve_picks_up_default_config_file() {
    let fs = MockFileSystem::new();
    fs.add_file("Simdag.toml", "[simulation]\nworkers = 7\n");

    let cfg = resolve_config(&fs, None).unwrap();
    assert_eq!(cfg.simulation.workers, 7);
}

#[test]
fn resolve_fails_for_missing_explicit_file() {
    let fs = MockFileSystem::new();
    let result = resolve_config(&fs, Some(Path::new("custom.toml")));
    assert!(result.is_err());
}
