// src/input/mod.rs

//! Precedence fact input.
//!
//! Records come from a file or from stdin and are parsed by [`parser`].

pub mod parser;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::dag::Precedence;
use crate::errors::Result;
use crate::fs::{read_stdin, FileSystem};

pub use parser::{parse_facts, parse_record};

/// Where precedence facts are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

/// Read and parse all facts from `source`.
pub fn load_facts(source: &InputSource, fs: &dyn FileSystem) -> Result<Vec<Precedence>> {
    let text = match source {
        InputSource::Stdin => read_stdin()?,
        InputSource::File(path) => read_file(fs, path)?,
    };

    let facts = parse_facts(&text)?;
    debug!(?source, facts = facts.len(), "loaded precedence facts");
    Ok(facts)
}

fn read_file(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    Ok(fs.read_to_string(path)?)
}
