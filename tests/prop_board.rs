//! Property-based tests for the board model, symmetry and move rules.
//!
//! Run with: cargo test --release prop_board

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use barrel::board::{JUMP_OFFSETS, midpoint, slot_count};
use barrel::rules::{all_legal_moves, apply_move, legal_targets};
use barrel::solver::{Solver, SolverConfig, solve};
use barrel::symmetry::{dedup_by_rotation, equivalent_under_rotation, rotate};
use barrel::{Board, Location, Slot};

/// A board of the given edge size with arbitrary contents.
fn board_of_size(edge: u8) -> impl Strategy<Value = Board> {
    proptest::collection::vec(any::<bool>(), slot_count(edge)).prop_map(move |pegs| {
        let mut cells = pegs
            .into_iter()
            .map(|peg| if peg { Slot::Peg } else { Slot::Empty });
        let rows: Vec<Vec<Slot>> = (1..=usize::from(edge))
            .map(|width| cells.by_ref().take(width).collect())
            .collect();
        Board::from_rows(&rows).unwrap()
    })
}

/// A board with edge size between 1 and `max_edge`.
fn board(max_edge: u8) -> impl Strategy<Value = Board> {
    (1..=max_edge).prop_flat_map(board_of_size)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Three rotations give back the original board.
    #[test]
    fn prop_rotate_three_times_is_identity(b in board(8)) {
        prop_assert_eq!(rotate(&rotate(&rotate(&b))), b);
    }

    /// Rotation keeps the peg count.
    #[test]
    fn prop_rotate_keeps_pegs(b in board(8)) {
        prop_assert_eq!(rotate(&b).peg_count(), b.peg_count());
    }

    /// Every slot is either a peg or a hole.
    #[test]
    fn prop_pegs_plus_holes_fill_board(b in board(8)) {
        let n = usize::from(b.edge_size());
        prop_assert_eq!(b.peg_count() + b.empty_count(), n * (n + 1) / 2);
    }

    /// Each legal move removes exactly one peg.
    #[test]
    fn prop_move_removes_one_peg(b in board(6)) {
        for mv in all_legal_moves(&b) {
            let next = apply_move(&b, mv);
            prop_assert_eq!(next.peg_count(), b.peg_count() - 1);
            prop_assert!(next.is_occupied(mv.to));
            prop_assert!(!next.is_occupied(mv.from));
            prop_assert!(!next.is_occupied(mv.jumped()));
        }
    }

    /// Legal targets are always on the board and empty.
    #[test]
    fn prop_targets_on_board(b in board(6)) {
        for (source, _) in b.iter() {
            for target in legal_targets(&b, source) {
                prop_assert!(b.is_valid_location(target));
                prop_assert!(!b.is_occupied(target));
            }
        }
    }

    /// Rotating a board rotates its moves, so the move count is unchanged.
    #[test]
    fn prop_rotation_preserves_move_count(b in board(6)) {
        prop_assert_eq!(all_legal_moves(&rotate(&b)).len(), all_legal_moves(&b).len());
    }

    /// Midpoint does not depend on argument order.
    #[test]
    fn prop_midpoint_symmetric(row in 3u8..20, col in 3u8..20, dir in 0usize..6) {
        let a = Location::new(row, col);
        let (d_row, d_col) = JUMP_OFFSETS[dir];
        let c = a.offset(d_row, d_col).unwrap();
        prop_assert_eq!(midpoint(a, c), midpoint(c, a));
        prop_assert_eq!(midpoint(a, c).offset(d_row / 2, d_col / 2), Some(c));
    }

    /// Dedup never grows the list and never keeps two rotations of one board.
    #[test]
    fn prop_dedup_distinct(boards in (1u8..=5).prop_flat_map(|n| {
        proptest::collection::vec(board_of_size(n), 0..12)
    })) {
        let kept = dedup_by_rotation(boards.clone());
        prop_assert!(kept.len() <= boards.len());
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                prop_assert!(!equivalent_under_rotation(a, b));
            }
        }
        for b in &boards {
            prop_assert!(kept.iter().any(|k| equivalent_under_rotation(b, k)));
        }
    }

    /// A board with no moves and several pegs has no solutions.
    #[test]
    fn prop_dead_board_has_no_solutions(b in board(6)) {
        if all_legal_moves(&b).is_empty() && b.peg_count() > 1 {
            prop_assert!(solve(&b).is_empty());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The configured solver finds exactly the plain search's solutions.
    #[test]
    fn prop_solver_matches_plain_search(
        b in board(4),
        parallel_depth in 0u8..3,
        prune_dead_ends in any::<bool>(),
    ) {
        let mut expected = solve(&b);
        expected.sort();

        let config = SolverConfig { parallel_depth, prune_dead_ends, time_limit: None };
        let outcome = Solver::new(config).solve_board(&b);
        let mut found = outcome.solutions;
        found.sort();

        prop_assert!(!outcome.interrupted);
        prop_assert_eq!(found, expected);
    }

    /// Every solution has one move per removed peg.
    #[test]
    fn prop_solution_length(b in board(4)) {
        for solution in solve(&b) {
            prop_assert_eq!(solution.len(), b.peg_count() - 1);
        }
    }
}
