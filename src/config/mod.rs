// src/config/mod.rs

//! Configuration loading and validation for simdag.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate value ranges (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_and_validate_with, load_from_path, resolve_config};
pub use model::{ConfigFile, ConfigOverrides, GraphSection, RawConfigFile, SimulationSection};
