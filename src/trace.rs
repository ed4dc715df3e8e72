//! Reading branch traces from text files.
//!
//! A trace holds one event per line: a hexadecimal branch address followed
//! by the outcome letter, e.g. `ab120024 t`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::branch::{BranchEvent, Outcome};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed trace line {line}: {text:?}")]
    Malformed { line: usize, text: String },
}

/// Parse one trace line. Returns `None` for anything other than a hex
/// address followed by `t` or `n`.
pub fn parse_event(line: &str) -> Option<BranchEvent> {
    let mut fields = line.split_whitespace();
    let pc = u64::from_str_radix(fields.next()?, 16).ok()?;
    let outcome = match fields.next()? {
        "t" | "T" => Outcome::T,
        "n" | "N" => Outcome::N,
        _ => return None,
    };
    Some(BranchEvent { pc, outcome })
}

/// Read a whole trace file. Blank lines are skipped; a malformed line is a
/// terminal error naming the line number.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<BranchEvent>, TraceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut events = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_event(&line).ok_or_else(|| TraceError::Malformed {
            line: i + 1,
            text: line.clone(),
        })?;
        events.push(event);
    }
    Ok(events)
}
