//! Search statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counters collected while exploring the move tree.
///
/// Parallel branches keep their own counters and are combined with
/// [`SearchStats::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including terminal ones.
    pub nodes: u64,
    /// Terminal boards with a single peg.
    pub wins: u64,
    /// Terminal boards with more than one peg.
    pub dead_ends: u64,
    /// Boards skipped because an equivalent board had no solutions.
    pub pruned: u64,
}

impl SearchStats {
    /// Add another set of counters to this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.wins += other.wins;
        self.dead_ends += other.dead_ends;
        self.pruned += other.pruned;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} wins, {} dead ends, {} pruned",
            self.nodes, self.wins, self.dead_ends, self.pruned
        )
    }
}
