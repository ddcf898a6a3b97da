//! A player whose moves are supplied from outside

use crate::{
    Result,
    tictactoe::{Board, Position, Side},
};

/// A person at the keyboard, or any other external move source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    side: Side,
}

impl Person {
    pub fn new(side: Side) -> Self {
        Self { side }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Place this person's side at `position`.
    ///
    /// # Errors
    ///
    /// Propagates any rejection from [`Board::assign`].
    pub fn make_move(&self, board: &mut Board, position: Position) -> Result<()> {
        board.assign(position, self.side.value())
    }
}
