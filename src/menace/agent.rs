//! MENACE: the minimax automaton
//!
//! Scores every legal move by exhaustive alpha-beta search and picks
//! uniformly among the best. Evaluated boards are memoised per instance in a
//! [`TranspositionTable`].

use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use tracing::{debug, trace};

use super::transposition::{CacheEntry, CacheStats, TranspositionTable};
use crate::{
    Result,
    player::PlayerKind,
    ports::Automaton,
    tictactoe::{Board, Position, Side},
};

/// Score of a board the maximiser goes on to win
pub const WIN: i8 = 1;
/// Score of a drawn board
pub const DRAW: i8 = 0;
/// Score of a board the maximiser goes on to lose
pub const LOSS: i8 = -1;

/// Minimax automaton with a transposition cache
pub struct Menace {
    side: Side,
    cache: TranspositionTable,
    rng: StdRng,
}

impl std::fmt::Debug for Menace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menace")
            .field("side", &self.side)
            .field("cache_len", &self.cache.len())
            .finish()
    }
}

impl Menace {
    /// Create a new MENACE playing `side`
    pub fn new(side: Side) -> Self {
        Self::with_seed(side, random())
    }

    /// Create a new MENACE whose tie-breaking is reproducible
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            cache: TranspositionTable::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Score every legal move on `board` from this automaton's point of view.
    ///
    /// Moves are returned in board order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board is finished.
    pub fn evaluate_moves(&mut self, board: &Board) -> Result<Vec<(Position, i8)>> {
        if board.is_finished() {
            return Err(crate::Error::NoValidMoves);
        }

        let mut scored = Vec::new();
        for position in board.empty_positions() {
            let child = board.with_move(position, self.side)?;
            // the opponent moves next, so the child is a minimising node
            let score =
                self.minimax(&child, LOSS, WIN, false, self.side, self.side.opponent())?;
            scored.push((position, score));
        }
        if scored.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        Ok(scored)
    }

    /// All positions achieving the best score on `board`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board is finished.
    pub fn best_moves(&mut self, board: &Board) -> Result<Vec<Position>> {
        let scored = self.evaluate_moves(board)?;
        Ok(optimal_positions(&scored))
    }

    /// Pick uniformly among `candidates` with this automaton's RNG
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if
    /// `candidates` is empty.
    pub fn choose(&mut self, candidates: &[Position]) -> Result<Position> {
        candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(crate::Error::NoValidMoves)
    }

    /// Discard every evaluated board
    pub fn clear_cache(&mut self) {
        debug!(side = %self.side, entries = self.cache.len(), "clearing transposition cache");
        self.cache.clear();
    }

    /// Number of boards currently cached
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Value of `board` for `maximiser`, searched within `(alpha, beta)`.
    ///
    /// Fail-soft: a result `<= alpha` is an upper bound on the true value, a
    /// result `>= beta` a lower bound, anything in between is exact.
    ///
    /// # Errors
    ///
    /// Propagates a rejected child move; every child is built from an empty
    /// position of an unfinished board, so this only fires on a broken board.
    fn minimax(
        &mut self,
        board: &Board,
        mut alpha: i8,
        mut beta: i8,
        maximising: bool,
        maximiser: Side,
        minimiser: Side,
    ) -> Result<i8> {
        let to_move = if maximising { maximiser } else { minimiser };

        if let Some(entry) = self.cache.get(board, to_move) {
            if let Some(score) = entry.apply_bound(&mut alpha, &mut beta) {
                return Ok(score);
            }
        }

        let result = board.check_result();
        if result.is_finished() {
            let score = match result.winner() {
                None => DRAW,
                Some(winner) if winner == maximiser => WIN,
                Some(_) => LOSS,
            };
            self.cache.insert(*board, to_move, CacheEntry::exact(score));
            return Ok(score);
        }

        let (window_alpha, window_beta) = (alpha, beta);
        let mut value = if maximising { LOSS } else { WIN };

        // children in increasing position order; no move ordering
        for position in board.empty_positions() {
            let child = board.with_move(position, to_move)?;
            let score = self.minimax(&child, alpha, beta, !maximising, maximiser, minimiser)?;
            if maximising {
                value = value.max(score);
                alpha = alpha.max(value);
            } else {
                value = value.min(score);
                beta = beta.min(value);
            }
            if alpha >= beta {
                trace!(plays = board.plays(), value, "alpha-beta cutoff");
                break;
            }
        }

        self.cache.insert(
            *board,
            to_move,
            CacheEntry::from_search(value, window_alpha, window_beta),
        );
        Ok(value)
    }
}

/// Positions sharing the highest score, in the order given
pub fn optimal_positions(scored: &[(Position, i8)]) -> Vec<Position> {
    let Some(best) = scored.iter().map(|&(_, score)| score).max() else {
        return Vec::new();
    };
    scored
        .iter()
        .filter(|&&(_, score)| score == best)
        .map(|&(position, _)| position)
        .collect()
}

impl Automaton for Menace {
    fn side(&self) -> Side {
        self.side
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Minimax
    }

    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let best = self.best_moves(board)?;
        let position = self.choose(&best)?;
        debug!(
            side = %self.side,
            plays = board.plays(),
            candidates = ?best,
            chosen = %position,
            cache_len = self.cache.len(),
            "minimax move"
        );
        Ok(position)
    }

    fn reset(&mut self) {
        self.clear_cache();
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
