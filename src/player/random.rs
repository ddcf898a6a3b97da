//! Uniform random baseline automaton

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    player::PlayerKind,
    ports::Automaton,
    tictactoe::{Board, Position, Side},
};

/// Plays a uniformly chosen empty position
#[derive(Debug, Clone)]
pub struct RandomAutomaton {
    side: Side,
    rng: StdRng,
}

impl RandomAutomaton {
    /// Create a new random automaton
    pub fn new(side: Side) -> Self {
        Self::with_seed(side, random())
    }

    /// Create a new random automaton with a deterministic seed
    pub fn with_seed(side: Side, seed: u64) -> Self {
        Self {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Automaton for RandomAutomaton {
    fn side(&self) -> Side {
        self.side
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Random
    }

    fn get_move(&mut self, board: &Board) -> Result<Position> {
        if board.is_finished() {
            return Err(crate::Error::NoValidMoves);
        }
        let moves = self.legal_moves(board);
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
