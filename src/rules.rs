//! Jump rules: move generation and state transition.
//!
//! A move jumps a peg over an occupied neighbour into a hole two slots away.
//! The jumped peg is removed, so every move lowers the peg count by one.

mod movegen;
mod moves;
mod transition;

pub use movegen::{NodeState, all_legal_moves, classify, legal_targets, moves_from};
pub use moves::Move;
pub use transition::{apply_move, apply_moves, replay, try_apply_move};
