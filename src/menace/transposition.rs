//! Transposition cache for the minimax search
//!
//! Entries are keyed by board (compared up to symmetry) and the side to move,
//! and record whether the stored score is exact or only a bound. A score
//! produced after an alpha-beta cutoff is a bound; treating it as exact would
//! let a later lookup under a different window return a wrong value.

use std::collections::HashMap;

use crate::tictactoe::{Board, Side};

/// How a cached score relates to the true minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The score is the true value
    Exact,
    /// The true value is at least the score
    Lower,
    /// The true value is at most the score
    Upper,
}

/// A cached score and its bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: i8,
    pub bound: Bound,
}

impl CacheEntry {
    pub fn exact(score: i8) -> Self {
        Self {
            score,
            bound: Bound::Exact,
        }
    }

    /// Classify a fail-soft search result against the window it was searched with
    pub fn from_search(score: i8, alpha: i8, beta: i8) -> Self {
        let bound = if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        Self { score, bound }
    }

    /// Use the entry inside the window `(alpha, beta)`.
    ///
    /// Returns the score when it settles the node; otherwise narrows the
    /// window with the bound and returns `None`.
    pub fn apply_bound(&self, alpha: &mut i8, beta: &mut i8) -> Option<i8> {
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= *beta => Some(self.score),
            Bound::Lower => {
                *alpha = (*alpha).max(self.score);
                None
            }
            Bound::Upper if self.score <= *alpha => Some(self.score),
            Bound::Upper => {
                *beta = (*beta).min(self.score);
                None
            }
        }
    }
}

/// Lookup counters for a transposition table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub lookups: u64,
    pub hits: u64,
}

/// Per-automaton memo of evaluated boards
///
/// Grows without eviction until [`clear`](Self::clear) is called. Each board
/// (up to symmetry) and side to move occupies at most one entry.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<(Board, Side), CacheEntry>,
    lookups: u64,
    hits: u64,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, board: &Board, to_move: Side) -> Option<CacheEntry> {
        self.lookups += 1;
        let entry = self.entries.get(&(*board, to_move)).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Store an entry, replacing any previous one for the same board
    pub fn insert(&mut self, board: Board, to_move: Side, entry: CacheEntry) {
        self.entries.insert((board, to_move), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.lookups = 0;
        self.hits = 0;
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            lookups: self.lookups,
            hits: self.hits,
        }
    }
}
