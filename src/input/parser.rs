// src/input/parser.rs

use crate::dag::Precedence;
use crate::errors::{Result, SimdagError};

/// Number of whitespace-separated tokens in one record:
/// `Step C must be finished before step A can begin.`
pub const RECORD_TOKENS: usize = 10;

/// Token position of the predecessor id.
pub const BEFORE_TOKEN: usize = 1;

/// Token position of the successor id.
pub const AFTER_TOKEN: usize = 7;

/// Parse one record. `line_no` is 1-based and only used for errors.
///
/// The fixed words around the two ids are not checked; only the token count
/// is.
pub fn parse_record(line: &str, line_no: usize) -> Result<Precedence> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() != RECORD_TOKENS {
        return Err(SimdagError::InputFormat {
            line: line_no,
            reason: format!(
                "expected {} tokens, found {}: {:?}",
                RECORD_TOKENS,
                tokens.len(),
                line.trim()
            ),
        });
    }

    Ok(Precedence::new(tokens[BEFORE_TOKEN], tokens[AFTER_TOKEN]))
}

/// Parse every record in `text`, in order. Blank lines are skipped.
///
/// The first malformed record aborts parsing; no partial result is returned.
pub fn parse_facts(text: &str) -> Result<Vec<Precedence>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_record(line, i + 1))
        .collect()
}
