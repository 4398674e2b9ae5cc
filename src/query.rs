//! Line-oriented query parser (§4.7).
//!
//! Translates one already-trimmed line of text into a [`Command`]. This is
//! an external collaborator of the core tree: it never touches a
//! `BPlusTreeMap` itself, only decodes arguments for the driver to pass
//! along.

use thiserror::Error;

/// A decoded query line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { key: i32, value: i32 },
    Get { key: i32 },
    Range { low: i32, high: i32 },
    Load { path: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("blank line")]
    Blank,
    #[error("unrecognized command {0:?}")]
    UnknownCommand(String),
    #[error("{command:?} expects {expected} argument(s), got {got}")]
    WrongArity {
        command: String,
        expected: usize,
        got: usize,
    },
    #[error("argument {0:?} is not a valid i32")]
    NotAnInteger(String),
}

/// Parse one query line. Whitespace-delimited; the leading token selects
/// the command (`p`, `g`, `r`, `l`).
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or(ParseError::Blank)?;
    let rest: Vec<&str> = tokens.collect();

    match command {
        "p" => {
            let [k, v] = require_arity(command, &rest, 2)?;
            Ok(Command::Put {
                key: parse_i32(k)?,
                value: parse_i32(v)?,
            })
        }
        "g" => {
            let [k] = require_arity(command, &rest, 1)?;
            Ok(Command::Get { key: parse_i32(k)? })
        }
        "r" => {
            let [lo, hi] = require_arity(command, &rest, 2)?;
            Ok(Command::Range {
                low: parse_i32(lo)?,
                high: parse_i32(hi)?,
            })
        }
        "l" => {
            let [path] = require_arity(command, &rest, 1)?;
            Ok(Command::Load {
                path: path.to_string(),
            })
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn require_arity<'a, const N: usize>(
    command: &str,
    tokens: &'a [&'a str],
    expected: usize,
) -> Result<[&'a str; N], ParseError> {
    tokens
        .try_into()
        .map_err(|_| ParseError::WrongArity {
            command: command.to_string(),
            expected,
            got: tokens.len(),
        })
}

fn parse_i32(token: &str) -> Result<i32, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::NotAnInteger(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_put() {
        assert_eq!(
            parse_line("p 10 20").unwrap(),
            Command::Put { key: 10, value: 20 }
        );
    }

    #[test]
    fn parses_get() {
        assert_eq!(parse_line("g -5").unwrap(), Command::Get { key: -5 });
    }

    #[test]
    fn parses_range() {
        assert_eq!(
            parse_line("r 0 100").unwrap(),
            Command::Range { low: 0, high: 100 }
        );
    }

    #[test]
    fn parses_load_but_does_not_validate_path() {
        assert_eq!(
            parse_line("l dump.bin").unwrap(),
            Command::Load {
                path: "dump.bin".to_string()
            }
        );
    }

    #[test]
    fn blank_line_is_rejected() {
        assert_eq!(parse_line(""), Err(ParseError::Blank));
        assert_eq!(parse_line("   "), Err(ParseError::Blank));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert_eq!(
            parse_line("x 1 2"),
            Err(ParseError::UnknownCommand("x".to_string()))
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(
            parse_line("p 1"),
            Err(ParseError::WrongArity {
                command: "p".to_string(),
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn non_integer_argument_is_rejected() {
        assert!(matches!(
            parse_line("g abc"),
            Err(ParseError::NotAnInteger(_))
        ));
    }
}
