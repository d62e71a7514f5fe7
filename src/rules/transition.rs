//! Applying moves to boards.

use super::{Move, all_legal_moves};
use crate::board::{Board, Slot};
use crate::error::{BoardError, BoardResult};

/// Board after playing `mv`.
///
/// `mv` must be one of [`all_legal_moves`] for `board`; this is not
/// re-checked. Use [`try_apply_move`] for moves from outside the search.
#[must_use]
pub fn apply_move(board: &Board, mv: Move) -> Board {
    board.with_slots(&[
        (mv.from, Slot::Empty),
        (mv.jumped(), Slot::Empty),
        (mv.to, Slot::Peg),
    ])
}

/// Apply each move to the same `board`, one successor per move.
///
/// The moves are not chained; this fans out to the children of one node.
#[must_use]
pub fn apply_moves(board: &Board, moves: &[Move]) -> Vec<Board> {
    moves.iter().map(|&mv| apply_move(board, mv)).collect()
}

/// Board after playing `mv`, checking that it is legal first.
///
/// # Errors
///
/// Returns [`BoardError::IllegalMove`] if `mv` is not a legal move on `board`.
pub fn try_apply_move(board: &Board, mv: Move) -> BoardResult<Board> {
    if all_legal_moves(board).contains(&mv) {
        Ok(apply_move(board, mv))
    } else {
        Err(BoardError::IllegalMove(mv))
    }
}

/// Play a sequence of moves in order, checking each one.
///
/// # Errors
///
/// Returns [`BoardError::IllegalMove`] for the first move that is not legal
/// on the board reached so far.
pub fn replay(board: &Board, moves: &[Move]) -> BoardResult<Board> {
    moves
        .iter()
        .try_fold(board.clone(), |current, &mv| try_apply_move(&current, mv))
}
