//! Locations on the triangular grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row and column deltas of the six jump directions.
///
/// Along a row, along the left diagonal (column fixed) and along the right
/// diagonal (row and column move together), in both directions. The
/// anti-diagonal offsets `(-2, 2)` and `(2, -2)` never land on a neighbour in
/// this layout and are left out.
pub const JUMP_OFFSETS: [(i8, i8); 6] = [(-2, -2), (-2, 0), (0, -2), (0, 2), (2, 0), (2, 2)];

/// A 1-indexed `(row, col)` position on the triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Row, counted from the apex (row 1 has one slot).
    pub row: u8,
    /// Column within the row, counted from the left edge.
    pub col: u8,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Shift this location by a signed delta.
    ///
    /// Returns `None` if either coordinate would drop below zero. The result
    /// is not checked against any board.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }

    /// Candidate jump targets two steps away in each of the six directions.
    ///
    /// Returns a fixed-size array and count to avoid heap allocation. The
    /// array holds candidates in indices `0..count`, in [`JUMP_OFFSETS`]
    /// order. Candidates whose coordinates would underflow are skipped; the
    /// rest still have to be checked against the board.
    #[must_use]
    #[inline]
    pub fn jump_destinations(&self) -> ([Location; 6], u8) {
        let mut result = [Location::new(0, 0); 6];
        let mut count = 0u8;

        for (d_row, d_col) in JUMP_OFFSETS {
            if let Some(target) = self.offset(d_row, d_col) {
                result[count as usize] = target;
                count += 1;
            }
        }

        (result, count)
    }

    /// The location between this one and `other`.
    ///
    /// See [`midpoint`].
    #[must_use]
    pub fn midpoint(self, other: Location) -> Location {
        midpoint(self, other)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The location lying between two locations two steps apart.
///
/// Each coordinate is taken independently: equal components are kept,
/// otherwise the smaller one plus one. Because the right diagonal moves row
/// and column by the same amount, this covers all six jump directions.
#[must_use]
pub fn midpoint(a: Location, b: Location) -> Location {
    fn between(x: u8, y: u8) -> u8 {
        if x == y { x } else { x.min(y) + 1 }
    }

    Location::new(between(a.row, b.row), between(a.col, b.col))
}
