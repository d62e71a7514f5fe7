//! Saved solver results.
//!
//! A report records, for each starting board, every solution found and the
//! search counters. Reports are plain JSON so they can be inspected by hand
//! and checked later with [`SolutionReport::verify`], which replays every
//! solution against its starting board.

use crate::board::{Board, Location};
use crate::error::BoardError;
use crate::rules::replay;
use crate::solver::{SearchOutcome, SearchStats, SolutionSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Results for one starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartReport {
    /// The starting board.
    pub board: Board,
    /// The empty location, when the board has exactly one.
    pub hole: Option<Location>,
    /// Winning move sequences in play order.
    pub solutions: SolutionSet,
    /// Search counters.
    pub stats: SearchStats,
    /// The search stopped early, so `solutions` may be incomplete.
    pub interrupted: bool,
}

impl StartReport {
    /// Build a start report from a finished search.
    #[must_use]
    pub fn new(board: Board, outcome: SearchOutcome) -> Self {
        Self {
            hole: board.single_hole(),
            board,
            solutions: outcome.solutions,
            stats: outcome.stats,
            interrupted: outcome.interrupted,
        }
    }
}

/// Results for a set of starting boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    /// One entry per starting board, in the order they were solved.
    pub starts: Vec<StartReport>,
}

/// Error type for report I/O and verification.
#[derive(Debug)]
pub enum ReportError {
    /// File could not be read or written.
    Io(io::Error),
    /// File is not a valid report.
    Json(serde_json::Error),
    /// A recorded move is not legal where it is played.
    Replay {
        /// Index of the starting board.
        start: usize,
        /// Index of the solution within that start.
        solution: usize,
        /// The replay failure.
        source: BoardError,
    },
    /// A recorded solution does not end with a single peg.
    NotSolved {
        /// Index of the starting board.
        start: usize,
        /// Index of the solution within that start.
        solution: usize,
        /// Pegs left after replaying it.
        pegs: usize,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "report I/O error: {e}"),
            ReportError::Json(e) => write!(f, "malformed report: {e}"),
            ReportError::Replay {
                start,
                solution,
                source,
            } => write!(f, "start {start}, solution {solution}: {source}"),
            ReportError::NotSolved {
                start,
                solution,
                pegs,
            } => write!(
                f,
                "start {start}, solution {solution}: ends with {pegs} pegs"
            ),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            ReportError::Json(e) => Some(e),
            ReportError::Replay { source, .. } => Some(source),
            ReportError::NotSolved { .. } => None,
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Io(e)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Json(e)
    }
}

impl SolutionReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of solving `board`.
    pub fn push(&mut self, board: Board, outcome: SearchOutcome) {
        self.starts.push(StartReport::new(board, outcome));
    }

    /// Total number of solutions across all starts.
    #[must_use]
    pub fn total_solutions(&self) -> usize {
        self.starts.iter().map(|start| start.solutions.len()).sum()
    }

    /// Counters summed across all starts.
    #[must_use]
    pub fn total_stats(&self) -> SearchStats {
        self.starts
            .iter()
            .fold(SearchStats::default(), |mut total, start| {
                total.merge(&start.stats);
                total
            })
    }

    /// Save the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Load a report saved with [`SolutionReport::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a report.
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Replay every solution and check that it ends with one peg.
    ///
    /// Returns the number of solutions checked.
    ///
    /// # Errors
    ///
    /// Returns the first solution that contains an illegal move or leaves
    /// more than one peg.
    pub fn verify(&self) -> Result<usize, ReportError> {
        let mut checked = 0;
        for (start, entry) in self.starts.iter().enumerate() {
            for (solution, moves) in entry.solutions.iter().enumerate() {
                let end = replay(&entry.board, moves).map_err(|source| ReportError::Replay {
                    start,
                    solution,
                    source,
                })?;
                if end.peg_count() != 1 {
                    return Err(ReportError::NotSolved {
                        start,
                        solution,
                        pegs: end.peg_count(),
                    });
                }
                checked += 1;
            }
        }
        Ok(checked)
    }
}
