//! Slot values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of one slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Slot {
    /// The slot holds a peg.
    Peg = 0,
    /// The slot is a hole.
    Empty = 1,
}

impl Slot {
    /// Check if this slot holds a peg.
    #[must_use]
    pub const fn is_peg(self) -> bool {
        matches!(self, Slot::Peg)
    }

    /// Glyph used when rendering a board.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Slot::Peg => 'o',
            Slot::Empty => '.',
        }
    }

    /// Parse a single board glyph.
    ///
    /// Accepts `o`, `P` and `X` for pegs and `.`, `E` and `_` for holes.
    #[must_use]
    pub const fn from_glyph(c: char) -> Option<Self> {
        match c {
            'o' | 'O' | 'P' | 'p' | 'X' | 'x' => Some(Slot::Peg),
            '.' | 'E' | 'e' | '_' => Some(Slot::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
