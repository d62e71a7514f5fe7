//! Board model for the triangular peg solitaire puzzle.
//!
//! The board is a triangle of `edge_size` rows. Row `r` (1-indexed, apex
//! first) holds exactly `r` slots, so a location `(row, col)` is valid when
//! `1 <= col <= row <= edge_size`:
//!
//! ```text
//!         (1,1)
//!       (2,1) (2,2)
//!     (3,1) (3,2) (3,3)
//! ```
//!
//! Boards are values. Nothing in the crate mutates a board after it is built;
//! moves and rotations produce new boards.

mod grid;
mod location;
mod slot;

pub(crate) use grid::check_edge_size;
pub use grid::{Board, locations, make_row, slot_count};
pub use location::{JUMP_OFFSETS, Location, midpoint};
pub use slot::Slot;

/// Edge size of the classic cracker barrel board.
pub const DEFAULT_EDGE_SIZE: u8 = 5;

/// Largest edge size a [`Board`] accepts.
pub const MAX_EDGE_SIZE: u8 = 8;
