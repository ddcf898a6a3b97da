//! Tic-Tac-Toe board, rules and game management

pub mod board;
pub mod game;
pub mod lines;
pub mod position;
pub mod symmetry;

pub use board::{Board, BoardElement, BoardIter, GameResult, Side, Value};
pub use game::{Game, GameType};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use position::Position;
pub use symmetry::D4Transform;
