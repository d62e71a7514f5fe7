//! CLI command implementations for Barrel.

pub(crate) mod solve;
pub(crate) mod starts;
pub(crate) mod verify;

mod output;

use barrel::Location;
use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Output format for the `starts` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum StartsFormat {
    /// Drawn boards.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `solve` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SolveFormat {
    /// Boards, counts and the first few solutions.
    Text,
    /// One line per starting board.
    Summary,
    /// The full report as JSON.
    Json,
}

/// Parse a `ROW,COL` location argument.
pub(crate) fn parse_location(s: &str) -> Result<Location, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Location::new(row, col))
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<barrel::BoardError> for CliError {
    fn from(e: barrel::BoardError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<barrel::report::ReportError> for CliError {
    fn from(e: barrel::report::ReportError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location("3,1"), Ok(Location::new(3, 1)));
        assert_eq!(parse_location(" 5 , 5 "), Ok(Location::new(5, 5)));
        assert!(parse_location("3").is_err());
        assert!(parse_location("a,1").is_err());
    }
}
