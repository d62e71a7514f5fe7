//! Error types for board construction and move application.

use crate::board::Location;
use crate::rules::Move;
use std::fmt;

/// Errors raised by the board model and the validated move helpers.
///
/// The search itself never produces one of these: every location it touches
/// has already passed [`Board::is_valid_location`](crate::board::Board::is_valid_location),
/// and every move it applies was just generated for that board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A location outside the triangular bounds of the board.
    OutOfRange {
        /// The offending location.
        location: Location,
        /// Edge size of the board that was queried.
        edge_size: u8,
    },
    /// A directly constructed board whose row does not match its index.
    RaggedRow {
        /// 1-indexed row number.
        row: usize,
        /// Width required by the triangular layout.
        expected: usize,
        /// Width actually supplied.
        found: usize,
    },
    /// A board with no rows, or more rows than [`MAX_EDGE_SIZE`](crate::board::MAX_EDGE_SIZE).
    BadEdgeSize(usize),
    /// A character in board text that is neither a peg nor a hole.
    InvalidGlyph(char),
    /// A move that is not legal on the board it was applied to.
    IllegalMove(Move),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange {
                location,
                edge_size,
            } => {
                write!(f, "location {location} is outside a board of edge size {edge_size}")
            }
            BoardError::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} slots, expected {expected}")
            }
            BoardError::BadEdgeSize(size) => write!(f, "unsupported edge size: {size}"),
            BoardError::InvalidGlyph(c) => write!(f, "invalid board glyph: {c:?}"),
            BoardError::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
