//! Move recommendations for a position
//!
//! A fresh [`Menace`] evaluates a copy of the board, so asking for advice
//! never disturbs the live game or any automaton's cache.

use serde::Serialize;

use super::{Menace, agent::optimal_positions};
use crate::{
    Result,
    ports::Automaton,
    tictactoe::{Board, Position, Side},
};

/// Recommended position for `side` on `board`.
///
/// The supplied board is not modified.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the board
/// is finished.
///
/// # Examples
///
/// ```
/// use noughts::{menace::advise, tictactoe::{Board, Position, Side}};
///
/// let board = Board::from_string("XX..O....")?;
/// assert_eq!(advise(&board, Side::Nought)?, Position::TopRight);
/// # Ok::<(), noughts::Error>(())
/// ```
pub fn advise(board: &Board, side: Side) -> Result<Position> {
    let copy = *board;
    Menace::new(side).get_move(&copy)
}

/// Full analysis behind a recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub side: Side,
    pub board: String,
    /// The recommended position, one of `optimal`
    pub position: Position,
    /// Every position achieving the best score
    pub optimal: Vec<Position>,
    /// Minimax score of every legal move, in board order
    pub scores: Vec<(Position, i8)>,
}

impl Advice {
    /// Analyse `board` for `side`, breaking ties with `seed`
    pub fn analyse(board: &Board, side: Side, seed: u64) -> Result<Self> {
        let mut menace = Menace::with_seed(side, seed);
        let scores = menace.evaluate_moves(board)?;
        let optimal = optimal_positions(&scores);
        let position = menace.choose(&optimal)?;
        Ok(Self {
            side,
            board: board.encode(),
            position,
            optimal,
            scores,
        })
    }

    /// The board after playing the recommended move
    pub fn apply_to(&self, board: &Board) -> Result<Board> {
        board.with_move(self.position, self.side)
    }
}
