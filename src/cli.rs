// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ConfigOverrides;
use crate::types::{CyclePolicy, ScheduleMode};

/// Command-line arguments for `simdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "simdag",
    version,
    about = "Order dependent tasks and simulate running them on a worker pool.",
    long_about = None
)]
pub struct CliArgs {
    /// File with one precedence record per line, or `-` for stdin.
    #[arg(long, short, value_name = "PATH", default_value = "-")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Simdag.toml` in the current directory is used when it
    /// exists, built-in defaults otherwise.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of simulated workers.
    #[arg(long, short, value_name = "N")]
    pub workers: Option<usize>,

    /// Fixed cost added to every task's duration.
    #[arg(long, value_name = "TICKS")]
    pub duration_base: Option<u64>,

    /// Byte value subtracted from a task id's first byte to get its rank.
    #[arg(long, value_name = "BYTE")]
    pub letter_offset: Option<u8>,

    /// Idle ticks after which the simulation gives up.
    #[arg(long, value_name = "TICKS")]
    pub stall_bound: Option<u64>,

    /// What to do when the input graph has a cycle.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_cycle: Option<CyclePolicy>,

    /// Which schedules to compute.
    #[arg(long, value_enum, default_value = "both")]
    pub mode: ScheduleMode,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SIMDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the input, print the graph, but don't schedule anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Config values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            workers: self.workers,
            duration_base: self.duration_base,
            letter_offset: self.letter_offset,
            stall_bound: self.stall_bound,
            on_cycle: self.on_cycle,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Parse arguments from an explicit iterator (first item is the binary
/// name).
pub fn parse_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::parse_from(args)
}
