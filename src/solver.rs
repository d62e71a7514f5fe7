//! Exhaustive depth-first search for single-peg finishes.
//!
//! Every board in the search is in one of three states (see
//! [`NodeState`]): active boards have legal moves and are expanded, won
//! boards have one peg left and contribute the path that reached them, dead
//! boards have no moves and more than one peg and contribute nothing. Each
//! move removes a peg, so the tree is at most `pegs - 1` deep.
//!
//! [`solve`] is the plain recursive search. [`Solver`] runs the same search
//! with statistics, cooperative cancellation, a dead-end cache and parallel
//! fan-out over the first few levels of the tree; none of these change the
//! set of solutions it returns.

mod signal;
mod stats;
mod trail;

pub use signal::StopSignal;
pub use stats::SearchStats;
pub use trail::Trail;

use crate::board::Board;
use crate::rules::{Move, NodeState, apply_move, classify};
use crate::symmetry::canonical_key;
use rayon::prelude::*;
use signal::Limits;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// A winning move sequence in the order the moves are played.
pub type Solution = Vec<Move>;

/// All winning move sequences found from one or more starting boards.
pub type SolutionSet = Vec<Solution>;

/// Every move sequence that takes `board` down to a single peg.
#[must_use]
pub fn solve(board: &Board) -> SolutionSet {
    solve_from(board, &Trail::new())
}

/// Every single-peg finish reachable from `board`, each prefixed by `trail`.
///
/// `trail` holds the moves that led to `board`, most recent first. A board
/// that is already won yields `trail` itself; a dead board yields nothing.
#[must_use]
pub fn solve_from(board: &Board, trail: &Trail) -> SolutionSet {
    match classify(board) {
        NodeState::Won => vec![trail.to_moves()],
        NodeState::Dead => Vec::new(),
        NodeState::Active(moves) => moves
            .into_iter()
            .flat_map(|mv| solve_from(&apply_move(board, mv), &trail.push(mv)))
            .collect(),
    }
}

/// Solve each board from an empty trail and combine the results.
#[must_use]
pub fn solve_all(boards: &[Board]) -> SolutionSet {
    boards.iter().flat_map(solve).collect()
}

/// Configuration for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Tree levels whose children are searched in parallel. Zero keeps the
    /// whole search on the calling thread.
    pub parallel_depth: u8,
    /// Skip boards that are rotations of boards already known to have no
    /// solutions.
    pub prune_dead_ends: bool,
    /// Stop searching a board after this long. The clock restarts for each
    /// board, so [`Solver::solve_all`] allows this much time per board.
    pub time_limit: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel_depth: 2,
            prune_dead_ends: true,
            time_limit: None,
        }
    }
}

/// Solutions and counters from one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Winning move sequences, each in play order.
    pub solutions: SolutionSet,
    /// Counters collected while searching.
    pub stats: SearchStats,
    /// The run was stopped before the tree was fully explored.
    pub interrupted: bool,
}

impl SearchOutcome {
    /// Append another outcome's solutions and counters to this one.
    pub fn merge(&mut self, other: SearchOutcome) {
        self.solutions.extend(other.solutions);
        self.stats.merge(&other.stats);
        self.interrupted |= other.interrupted;
    }

    fn merged(mut self, other: SearchOutcome) -> SearchOutcome {
        self.merge(other);
        self
    }

    fn stopped() -> Self {
        Self {
            interrupted: true,
            ..Self::default()
        }
    }
}

/// Configurable search driver.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    signal: StopSignal,
}

impl Solver {
    /// Create a solver with its own stop signal.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            signal: StopSignal::new(),
        }
    }

    /// Create a solver that listens to an existing stop signal.
    #[must_use]
    pub fn with_signal(config: SolverConfig, signal: StopSignal) -> Self {
        Self { config, signal }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// A handle that stops this solver's searches when raised.
    #[must_use]
    pub fn stop_signal(&self) -> StopSignal {
        self.signal.clone()
    }

    /// Search every single-peg finish from `board`.
    #[must_use]
    pub fn solve_board(&self, board: &Board) -> SearchOutcome {
        let deadline = self.config.time_limit.map(|limit| Instant::now() + limit);
        let limits = Limits::new(self.signal.clone(), deadline);
        self.fan_out(&limits, board, &Trail::new(), 0)
    }

    /// Solve each board and combine the results.
    #[must_use]
    pub fn solve_all(&self, boards: &[Board]) -> SearchOutcome {
        boards
            .iter()
            .map(|board| self.solve_board(board))
            .fold(SearchOutcome::default(), SearchOutcome::merged)
    }

    /// Parallel part of the tree. Each child gets its own board and trail;
    /// results only meet in the final reduce.
    fn fan_out(&self, limits: &Limits, board: &Board, trail: &Trail, depth: u8) -> SearchOutcome {
        if depth >= self.config.parallel_depth {
            let mut search = Search::new(limits, self.config.prune_dead_ends);
            search.visit(board, trail);
            return search.outcome;
        }

        if limits.should_stop() {
            return SearchOutcome::stopped();
        }

        let mut outcome = SearchOutcome::default();
        outcome.stats.nodes = 1;
        match classify(board) {
            NodeState::Won => {
                outcome.stats.wins = 1;
                outcome.solutions.push(trail.to_moves());
                outcome
            }
            NodeState::Dead => {
                outcome.stats.dead_ends = 1;
                outcome
            }
            NodeState::Active(moves) => moves
                .into_par_iter()
                .map(|mv| self.fan_out(limits, &apply_move(board, mv), &trail.push(mv), depth + 1))
                .reduce(SearchOutcome::default, SearchOutcome::merged)
                .merged(outcome),
        }
    }
}

/// Sequential search below the parallel levels.
struct Search<'a> {
    limits: &'a Limits,
    prune: bool,
    /// Canonical keys of boards with no single-peg finish.
    dead: HashSet<Board>,
    outcome: SearchOutcome,
}

impl<'a> Search<'a> {
    fn new(limits: &'a Limits, prune: bool) -> Self {
        Self {
            limits,
            prune,
            dead: HashSet::new(),
            outcome: SearchOutcome::default(),
        }
    }

    fn visit(&mut self, board: &Board, trail: &Trail) {
        if self.limits.should_stop() {
            self.outcome.interrupted = true;
            return;
        }

        let key = if self.prune {
            let key = canonical_key(board);
            if self.dead.contains(&key) {
                self.outcome.stats.pruned += 1;
                return;
            }
            Some(key)
        } else {
            None
        };

        self.outcome.stats.nodes += 1;
        let found_before = self.outcome.solutions.len();

        match classify(board) {
            NodeState::Won => {
                self.outcome.stats.wins += 1;
                self.outcome.solutions.push(trail.to_moves());
            }
            NodeState::Dead => self.outcome.stats.dead_ends += 1,
            NodeState::Active(moves) => {
                for mv in moves {
                    self.visit(&apply_move(board, mv), &trail.push(mv));
                }
            }
        }

        // A stopped subtree proves nothing about the board.
        if let Some(key) = key
            && self.outcome.solutions.len() == found_before
            && !self.outcome.interrupted
        {
            self.dead.insert(key);
        }
    }
}
