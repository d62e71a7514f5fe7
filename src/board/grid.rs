//! The board value itself.

use super::{Location, MAX_EDGE_SIZE, Slot};
use crate::error::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of slots on a board with the given edge size.
#[must_use]
pub const fn slot_count(edge_size: u8) -> usize {
    let n = edge_size as usize;
    n * (n + 1) / 2
}

/// Offset of the first slot of a 1-indexed row in the flat cell vector.
const fn row_start(row: usize) -> usize {
    row * (row - 1) / 2
}

/// Every location of a board, apex to base and left to right within a row.
pub fn locations(edge_size: u8) -> impl Iterator<Item = Location> {
    (1..=edge_size).flat_map(|row| (1..=row).map(move |col| Location::new(row, col)))
}

/// Build row `row` with a peg in every slot except `empty`.
///
/// If `empty` lies in a different row the result is all pegs.
#[must_use]
pub fn make_row(row: u8, empty: Location) -> Vec<Slot> {
    (1..=row)
        .map(|col| {
            if Location::new(row, col) == empty {
                Slot::Empty
            } else {
                Slot::Peg
            }
        })
        .collect()
}

/// A triangular peg solitaire board.
///
/// Equality is structural: two boards with the same edge size and the same
/// slot contents are the same board, however they were produced. Serializes
/// as its compact text form, e.g. `"./oo/ooo"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board {
    /// Number of rows, also the width of the base row.
    edge_size: u8,
    /// Slots stored row by row, apex first.
    cells: Vec<Slot>,
}

impl Board {
    /// Create a full board with a single hole at `empty`.
    ///
    /// An `empty` location outside the board leaves every slot pegged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BadEdgeSize`] if `edge_size` is zero or above
    /// [`MAX_EDGE_SIZE`].
    pub fn new(edge_size: u8, empty: Location) -> BoardResult<Self> {
        check_edge_size(usize::from(edge_size))?;

        let mut cells = Vec::with_capacity(slot_count(edge_size));
        for row in 1..=edge_size {
            cells.extend(make_row(row, empty));
        }

        Ok(Self { edge_size, cells })
    }

    /// Build a board from explicit rows, apex first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RaggedRow`] if row `i` does not hold exactly `i`
    /// slots, or [`BoardError::BadEdgeSize`] for an unsupported row count.
    pub fn from_rows<R: AsRef<[Slot]>>(rows: &[R]) -> BoardResult<Self> {
        check_edge_size(rows.len())?;

        let mut cells = Vec::with_capacity(row_start(rows.len() + 1));
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != idx + 1 {
                return Err(BoardError::RaggedRow {
                    row: idx + 1,
                    expected: idx + 1,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        #[allow(clippy::cast_possible_truncation)]
        let edge_size = rows.len() as u8;
        Ok(Self { edge_size, cells })
    }

    /// Build a board by asking `f` for the contents of every location.
    ///
    /// `edge_size` must already be known to be valid.
    pub(crate) fn from_fn(edge_size: u8, f: impl Fn(Location) -> Slot) -> Self {
        Self {
            edge_size,
            cells: locations(edge_size).map(f).collect(),
        }
    }

    /// Get the edge size of the board.
    #[must_use]
    pub const fn edge_size(&self) -> u8 {
        self.edge_size
    }

    /// Iterate over the rows, apex first.
    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> {
        (1..=usize::from(self.edge_size)).map(|row| {
            let start = row_start(row);
            &self.cells[start..start + row]
        })
    }

    /// Iterate over all locations and their slots, apex to base.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Slot)> + '_ {
        locations(self.edge_size).zip(self.cells.iter().copied())
    }

    /// Iterate over the locations that hold a peg.
    pub fn pegs(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter()
            .filter(|(_, slot)| slot.is_peg())
            .map(|(loc, _)| loc)
    }

    /// Iterate over the empty locations.
    pub fn holes(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter()
            .filter(|(_, slot)| !slot.is_peg())
            .map(|(loc, _)| loc)
    }

    /// The empty location of a single-hole board, or `None` if the board has
    /// no holes or several.
    #[must_use]
    pub fn single_hole(&self) -> Option<Location> {
        let mut holes = self.holes();
        match (holes.next(), holes.next()) {
            (Some(hole), None) => Some(hole),
            _ => None,
        }
    }

    /// Check if a location lies inside the triangle.
    ///
    /// Never fails; use it to filter locations before [`Board::slot_at`].
    #[must_use]
    pub const fn is_valid_location(&self, loc: Location) -> bool {
        loc.row > 0 && loc.row <= self.edge_size && loc.col > 0 && loc.col <= loc.row
    }

    /// Convert a location to an index into the cell vector.
    #[must_use]
    fn index(&self, loc: Location) -> Option<usize> {
        if self.is_valid_location(loc) {
            Some(row_start(usize::from(loc.row)) + usize::from(loc.col) - 1)
        } else {
            None
        }
    }

    /// Get the slot at a location, or `None` outside the board.
    #[must_use]
    pub fn get(&self, loc: Location) -> Option<Slot> {
        self.index(loc).map(|idx| self.cells[idx])
    }

    /// Get the slot at a location.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] if `loc` is not on the board.
    pub fn slot_at(&self, loc: Location) -> BoardResult<Slot> {
        self.get(loc).ok_or(BoardError::OutOfRange {
            location: loc,
            edge_size: self.edge_size,
        })
    }

    /// Check if a location holds a peg.
    ///
    /// Locations outside the board are never occupied.
    #[must_use]
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.get(loc) == Some(Slot::Peg)
    }

    /// Count the pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_peg()).count()
    }

    /// Count the holes on the board.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.peg_count()
    }

    /// Rows separated by `/` with no indentation, the inverse of `parse`.
    #[must_use]
    pub fn to_compact(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|slot| slot.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Copy of this board with some slots replaced.
    ///
    /// The result is rebuilt slot by slot; `self` is left untouched.
    /// Replacements outside the board are ignored.
    #[must_use]
    pub fn with_slots(&self, changes: &[(Location, Slot)]) -> Self {
        let cells = self
            .iter()
            .map(|(loc, slot)| {
                changes
                    .iter()
                    .rev()
                    .find(|(changed, _)| *changed == loc)
                    .map_or(slot, |&(_, replacement)| replacement)
            })
            .collect();

        Self {
            edge_size: self.edge_size,
            cells,
        }
    }
}

/// Reject edge sizes a [`Board`] cannot have.
pub(crate) fn check_edge_size(size: usize) -> BoardResult<()> {
    if size == 0 || size > usize::from(MAX_EDGE_SIZE) {
        return Err(BoardError::BadEdgeSize(size));
    }
    Ok(())
}

impl fmt::Display for Board {
    /// One row per line, indented so the rows form a triangle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            let indent = usize::from(self.edge_size) - (idx + 1);
            write!(f, "{:indent$}", "")?;
            for (col, slot) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{slot}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse rows separated by `/` or newlines. Whitespace inside a row is
    /// ignored, so the output of `Display` parses back to the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.split(['/', '\n']) {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Slot::from_glyph(c).ok_or(BoardError::InvalidGlyph(c)))
                .collect::<BoardResult<Vec<_>>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(&rows)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_compact()
    }
}

impl TryFrom<String> for Board {
    type Error = BoardError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}
