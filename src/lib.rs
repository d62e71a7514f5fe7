// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Barrel: an exhaustive solver for triangular peg solitaire.
//!
//! The cracker barrel puzzle is a triangle of 15 holes filled with pegs
//! except one. A peg jumps a neighbour into a hole behind it and the jumped
//! peg is removed. The goal is to finish with a single peg. This crate
//! enumerates every move sequence that does so.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Solver (DFS, rayon fan-out)       │
//! ├──────────────────┬──────────────────┤
//! │  Rules (moves)   │  Symmetry        │
//! ├──────────────────┴──────────────────┤
//! │           Board model               │
//! └─────────────────────────────────────┘
//! ```
//!
//! ```
//! use barrel::rules::all_legal_moves;
//! use barrel::{Board, Location};
//!
//! let board = Board::new(5, Location::new(1, 1)).unwrap();
//! assert_eq!(all_legal_moves(&board).len(), 2);
//! ```

pub mod board;
pub mod error;
pub mod report;
pub mod rules;
pub mod solver;
pub mod symmetry;

pub use error::{BoardError, BoardResult};

// Re-export key types at crate root for convenience
pub use board::{Board, DEFAULT_EDGE_SIZE, Location, Slot};
pub use rules::{Move, NodeState};
pub use solver::{
    SearchOutcome, SearchStats, Solution, SolutionSet, Solver, SolverConfig, StopSignal, solve,
    solve_all,
};
pub use symmetry::canonical_starts;
