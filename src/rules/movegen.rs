//! Legal move generation.

use super::Move;
use crate::board::{Board, Location, locations, midpoint};

/// Classification of a board during the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeState {
    /// At least one legal move remains; the moves are carried along.
    Active(Vec<Move>),
    /// No legal moves and exactly one peg left.
    Won,
    /// No legal moves and more than one peg left.
    Dead,
}

impl NodeState {
    /// Check if this is a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, NodeState::Active(_))
    }
}

/// Holes that a peg at `source` can jump into.
///
/// Empty if `source` holds no peg. Otherwise each candidate from
/// [`Location::jump_destinations`] is kept when it lies on the board, is
/// empty, and has a peg between it and `source`.
#[must_use]
pub fn legal_targets(board: &Board, source: Location) -> Vec<Location> {
    if !board.is_occupied(source) {
        return Vec::new();
    }

    let (candidates, count) = source.jump_destinations();
    candidates[..count as usize]
        .iter()
        .copied()
        .filter(|&target| {
            board.is_valid_location(target)
                && !board.is_occupied(target)
                && board.is_occupied(midpoint(source, target))
        })
        .collect()
}

/// Legal moves starting at `source`.
#[must_use]
pub fn moves_from(board: &Board, source: Location) -> Vec<Move> {
    legal_targets(board, source)
        .into_iter()
        .map(|target| Move::new(source, target))
        .collect()
}

/// Every legal move on the board.
///
/// Sources are visited apex to base and left to right within a row; targets
/// for one source follow [`JUMP_OFFSETS`](crate::board::JUMP_OFFSETS) order.
#[must_use]
pub fn all_legal_moves(board: &Board) -> Vec<Move> {
    locations(board.edge_size())
        .flat_map(|source| moves_from(board, source))
        .collect()
}

/// Classify a board as active, won or dead.
#[must_use]
pub fn classify(board: &Board) -> NodeState {
    let moves = all_legal_moves(board);
    if !moves.is_empty() {
        NodeState::Active(moves)
    } else if board.peg_count() == 1 {
        NodeState::Won
    } else {
        NodeState::Dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apex_hole() -> Board {
        Board::new(5, Location::new(1, 1)).unwrap()
    }

    #[test]
    fn test_legal_targets_into_apex() {
        let board = apex_hole();
        assert_eq!(
            legal_targets(&board, Location::new(3, 1)),
            vec![Location::new(1, 1)]
        );
        assert_eq!(
            legal_targets(&board, Location::new(3, 3)),
            vec![Location::new(1, 1)]
        );
        assert!(legal_targets(&board, Location::new(5, 3)).is_empty());
    }

    #[test]
    fn test_legal_targets_from_hole() {
        let board = apex_hole();
        assert!(legal_targets(&board, Location::new(1, 1)).is_empty());
    }

    #[test]
    fn test_legal_targets_needs_jumped_peg() {
        // (3, 1) -> (3, 3) is blocked because (3, 2) is empty.
        let board: Board = "o/oo/o../oooo/ooooo".parse().unwrap();
        let targets = legal_targets(&board, Location::new(3, 1));
        assert!(!targets.contains(&Location::new(3, 3)));
        assert!(targets.is_empty());
    }

    #[test]
    fn test_all_legal_moves_order() {
        let moves = all_legal_moves(&apex_hole());
        assert_eq!(
            moves,
            vec![
                Move::new(Location::new(3, 1), Location::new(1, 1)),
                Move::new(Location::new(3, 3), Location::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_all_legal_moves_row_jumps() {
        let board = Board::new(5, Location::new(5, 3)).unwrap();
        let moves = all_legal_moves(&board);
        assert_eq!(moves.len(), 4);
        assert!(moves.contains(&Move::new(Location::new(5, 1), Location::new(5, 3))));
        assert!(moves.contains(&Move::new(Location::new(5, 5), Location::new(5, 3))));
        assert!(moves.contains(&Move::new(Location::new(3, 1), Location::new(5, 3))));
        assert!(moves.contains(&Move::new(Location::new(3, 3), Location::new(5, 3))));
    }

    #[test]
    fn test_classify() {
        assert!(matches!(classify(&apex_hole()), NodeState::Active(m) if m.len() == 2));

        let won: Board = "./../.o./..../.....".parse().unwrap();
        assert_eq!(classify(&won), NodeState::Won);

        let dead: Board = "o/../.../..../....o".parse().unwrap();
        assert_eq!(classify(&dead), NodeState::Dead);
        assert!(NodeState::Dead.is_terminal());
    }
}
