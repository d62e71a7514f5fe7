//! End-to-end tests on the classic 15-hole board.
//!
//! These search the full move tree, so they take a few seconds in debug
//! builds. Run with: cargo test --release known_solutions

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use barrel::report::SolutionReport;
use barrel::rules::{apply_move, replay};
use barrel::symmetry::{all_starting_boards, canonical_starts, equivalent_under_rotation};
use barrel::{Board, DEFAULT_EDGE_SIZE, Location, Move, Solver, SolverConfig, solve};

fn apex_hole() -> Board {
    Board::new(DEFAULT_EDGE_SIZE, Location::new(1, 1)).unwrap()
}

#[test]
fn test_apex_hole_solution_count() {
    let outcome = Solver::default().solve_board(&apex_hole());
    assert!(!outcome.interrupted);
    assert_eq!(outcome.solutions.len(), 29_760);
    assert_eq!(outcome.stats.wins, 29_760);
}

#[test]
fn test_apex_hole_solutions_are_complete_games() {
    let board = apex_hole();
    let outcome = Solver::default().solve_board(&board);

    for solution in &outcome.solutions {
        assert_eq!(solution.len(), board.peg_count() - 1);
        let end = replay(&board, solution).unwrap();
        assert_eq!(end.peg_count(), 1);
    }
}

#[test]
fn test_first_move_from_apex_hole() {
    let board = apex_hole();
    let outcome = Solver::default().solve_board(&board);
    let first_moves: std::collections::BTreeSet<Move> =
        outcome.solutions.iter().map(|s| s[0]).collect();
    assert_eq!(
        first_moves.into_iter().collect::<Vec<_>>(),
        vec![
            Move::new(Location::new(3, 1), Location::new(1, 1)),
            Move::new(Location::new(3, 3), Location::new(1, 1)),
        ]
    );

    let after: Board = "P/EP/EPP/PPPP/PPPPP".parse().unwrap();
    assert_eq!(
        apply_move(&board, Move::new(Location::new(3, 1), Location::new(1, 1))),
        after
    );
}

#[test]
fn test_plain_search_agrees_with_parallel_solver() {
    let board = apex_hole();
    let mut plain = solve(&board);
    let mut parallel = Solver::new(SolverConfig {
        parallel_depth: 4,
        prune_dead_ends: true,
        time_limit: None,
    })
    .solve_board(&board)
    .solutions;

    plain.sort();
    parallel.sort();
    assert_eq!(plain, parallel);
}

#[test]
fn test_canonical_start_counts() {
    let starts = canonical_starts(DEFAULT_EDGE_SIZE).unwrap();
    let holes: Vec<Location> = starts
        .iter()
        .map(|b| b.iter().find(|(_, slot)| !slot.is_peg()).unwrap().0)
        .collect();
    assert_eq!(
        holes,
        vec![
            Location::new(1, 1),
            Location::new(2, 1),
            Location::new(2, 2),
            Location::new(3, 1),
            Location::new(3, 2),
        ]
    );

    let solver = Solver::default();
    let counts: Vec<usize> = starts
        .iter()
        .map(|b| solver.solve_board(b).solutions.len())
        .collect();
    assert_eq!(counts, vec![29_760, 14_880, 14_880, 85_258, 1_550]);
}

#[test]
fn test_rotated_starts_have_equal_counts() {
    let solver = Solver::default();
    let boards = all_starting_boards(DEFAULT_EDGE_SIZE).unwrap();
    let apex = &boards[0];
    for other in boards.iter().filter(|b| equivalent_under_rotation(apex, b)) {
        assert_eq!(solver.solve_board(other).solutions.len(), 29_760);
    }
}

#[test]
fn test_report_verifies_after_reload() {
    let board = Board::new(DEFAULT_EDGE_SIZE, Location::new(3, 2)).unwrap();
    let outcome = Solver::default().solve_board(&board);

    let mut report = SolutionReport::new();
    report.push(board, outcome);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("center.json");
    report.save(&path).unwrap();

    let loaded = SolutionReport::load(&path).unwrap();
    assert_eq!(loaded.verify().unwrap(), 1_550);
}
