//! Rotational symmetry of the triangle.
//!
//! Rotating the board by 120 degrees maps jumps to jumps, so two boards that
//! are rotations of each other have the same solutions up to relabelling.
//! Only rotations are identified; mirror images are kept as distinct boards.

use crate::board::{Board, Location, Slot, check_edge_size, locations};
use crate::error::BoardResult;

/// Rotate the board by 120 degrees, turning its left edge into the base.
///
/// New row `R` is the old anti-diagonal starting at `(n - R + 1, n - R + 1)`
/// and running down the column, so slot `(R, C)` is read from
/// `(n - R + C, n - R + 1)`. Three rotations give back the original board.
#[must_use]
pub fn rotate(board: &Board) -> Board {
    let n = board.edge_size();
    Board::from_fn(n, |loc| {
        let source = Location::new(n - loc.row + loc.col, n - loc.row + 1);
        board.get(source).unwrap_or(Slot::Empty)
    })
}

/// The board and its two proper rotations.
#[must_use]
pub fn rotations(board: &Board) -> [Board; 3] {
    let once = rotate(board);
    let twice = rotate(&once);
    [board.clone(), once, twice]
}

/// Check if `b` is `a` up to rotation.
#[must_use]
pub fn equivalent_under_rotation(a: &Board, b: &Board) -> bool {
    rotations(b).iter().any(|rotated| rotated == a)
}

/// Check if any board in `boards` is a rotation of `board`.
#[must_use]
pub fn contains_equivalent(board: &Board, boards: &[Board]) -> bool {
    boards
        .iter()
        .any(|other| equivalent_under_rotation(board, other))
}

/// Keep one board per rotation class, first seen wins.
#[must_use]
pub fn dedup_by_rotation<I>(boards: I) -> Vec<Board>
where
    I: IntoIterator<Item = Board>,
{
    boards.into_iter().fold(Vec::new(), |mut kept, board| {
        if !contains_equivalent(&board, &kept) {
            kept.push(board);
        }
        kept
    })
}

/// One board per location, with only that location empty.
///
/// # Errors
///
/// Returns an error if `edge_size` is not a supported board size.
pub fn all_starting_boards(edge_size: u8) -> BoardResult<Vec<Board>> {
    check_edge_size(usize::from(edge_size))?;
    locations(edge_size)
        .map(|hole| Board::new(edge_size, hole))
        .collect()
}

/// Single-hole starting boards with rotations removed.
///
/// # Errors
///
/// Returns an error if `edge_size` is not a supported board size.
pub fn canonical_starts(edge_size: u8) -> BoardResult<Vec<Board>> {
    Ok(dedup_by_rotation(all_starting_boards(edge_size)?))
}

/// Smallest of the three rotations, usable as a key for a rotation class.
#[must_use]
pub fn canonical_key(board: &Board) -> Board {
    let [a, b, c] = rotations(board);
    a.min(b).min(c)
}
