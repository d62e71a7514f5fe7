//! Persistent move list used as the "path so far" during the search.

use crate::rules::Move;
use std::sync::Arc;

#[derive(Debug)]
struct Node {
    mv: Move,
    rest: Option<Arc<Node>>,
}

/// An immutable list of moves, most recent first.
///
/// [`Trail::push`] returns a new trail sharing its tail with the old one, so
/// sibling branches each extend their parent's trail without copying it and
/// without seeing each other's moves. Trails are `Send + Sync` and can be
/// handed to other threads.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    head: Option<Arc<Node>>,
    len: usize,
}

impl Trail {
    /// Create an empty trail.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// A new trail with `mv` in front of this one.
    #[must_use]
    pub fn push(&self, mv: Move) -> Self {
        Self {
            head: Some(Arc::new(Node {
                mv,
                rest: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of moves on the trail.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the trail has no moves.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recent move, if any.
    #[must_use]
    pub fn last(&self) -> Option<Move> {
        self.head.as_ref().map(|node| node.mv)
    }

    /// Iterate from the most recent move back to the first.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.rest.as_deref()).map(|node| node.mv)
    }

    /// The moves in the order they were played.
    #[must_use]
    pub fn to_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.iter().collect();
        moves.reverse();
        moves
    }
}
