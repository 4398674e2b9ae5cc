//! REPL / batch driver (§4.8): reads query lines and dispatches them to a
//! [`BPlusTreeMap`], formatting output to match the legacy line protocol.

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::warn;

use bplustree_kv::BPlusTreeMap;

use crate::query::{parse_line, Command, ParseError};

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("failed to open query file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Tally of what a run did, logged once at the end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub parse_errors: usize,
    pub puts: usize,
    pub gets: usize,
    pub ranges: usize,
    pub unsupported: usize,
}

/// Run every line from `input` against `tree`, writing query output to
/// `output`. Parse errors and the unsupported `Load` command are logged
/// and skipped; the tree is left untouched by either.
pub fn run<R: BufRead, W: Write>(
    tree: &mut BPlusTreeMap,
    input: R,
    mut output: W,
) -> std::io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for line in input.lines() {
        let line = line?;
        summary.lines += 1;

        match parse_line(&line) {
            Ok(Command::Put { key, value }) => {
                tree.insert(key, value);
                summary.puts += 1;
            }
            Ok(Command::Get { key }) => {
                summary.gets += 1;
                match tree.find(key) {
                    Some(value) => writeln!(output, "{value}")?,
                    None => writeln!(output)?, // legacy collapse: absent prints a bare newline
                }
            }
            Ok(Command::Range { low, high }) => {
                summary.ranges += 1;
                for value in tree.range(low, high) {
                    writeln!(output, "{value}")?;
                }
            }
            Ok(Command::Load { path }) => {
                summary.unsupported += 1;
                warn!(path, "'l' (binary load) is unsupported; line skipped");
            }
            Err(err @ ParseError::Blank) => {
                // Blank lines are common in hand-edited query files; don't
                // spam the log for them.
                let _ = err;
            }
            Err(err) => {
                summary.parse_errors += 1;
                warn!(%line, %err, "could not parse query line; skipped");
            }
        }
    }

    Ok(summary)
}
