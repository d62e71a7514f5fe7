//! The move type.

use crate::board::{Location, midpoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A jump from `from` to `to` over the slot between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Slot the jumping peg leaves.
    pub from: Location,
    /// Hole the jumping peg lands in.
    pub to: Location,
}

impl Move {
    /// Create a new move.
    ///
    /// Nothing is checked here; `from` and `to` are expected to be two slots
    /// apart along a row or one of the diagonals.
    #[must_use]
    pub const fn new(from: Location, to: Location) -> Self {
        Self { from, to }
    }

    /// The slot whose peg is removed by this move.
    #[must_use]
    pub fn jumped(&self) -> Location {
        midpoint(self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
