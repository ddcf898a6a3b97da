//! Automaton port - abstraction over players that choose their own moves
//!
//! Implemented by:
//! - the minimax automaton ([`Menace`](crate::menace::Menace))
//! - the uniform random baseline ([`RandomAutomaton`](crate::player::RandomAutomaton))

use crate::{
    Result,
    player::PlayerKind,
    tictactoe::{Board, Position, Side},
};

/// Automaton trait - unified interface for move-choosing players
///
/// The board is always passed in rather than held, so an automaton can be
/// asked about the live board or about any hypothetical copy of it.
///
/// # Examples
///
/// ```
/// use noughts::{
///     player::RandomAutomaton,
///     ports::Automaton,
///     tictactoe::{Board, Side},
/// };
///
/// let mut automaton = RandomAutomaton::with_seed(Side::Cross, 7);
/// let board = Board::new();
/// let position = automaton.get_move(&board)?;
/// assert!(board.is_empty(position));
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait Automaton: Send {
    /// The side this automaton plays.
    fn side(&self) -> Side;

    /// Which kind of player this is.
    fn kind(&self) -> PlayerKind;

    /// Choose a position to play on `board`.
    ///
    /// The board is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board is finished or full. Callers are expected to check the result
    /// first; this is never retried.
    fn get_move(&mut self, board: &Board) -> Result<Position>;

    /// Positions where a move can currently be made on `board`.
    fn legal_moves(&self, board: &Board) -> Vec<Position> {
        board.empty_positions()
    }

    /// Discard any internal search state.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for stateless automata.
    fn reset(&mut self) {}

    /// Seed the automaton's internal random number generator.
    ///
    /// # Default Implementation
    ///
    /// Does nothing.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
