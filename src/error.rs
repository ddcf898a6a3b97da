//! Error types for the noughts crate

use thiserror::Error;

use crate::{
    player::PlayerKind,
    tictactoe::{GameResult, GameType, Position, Side, Value},
};

/// Main error type for the noughts crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot assign an empty value to {position}")]
    EmptyValueRejected { position: Position },

    #[error("position {position} is already occupied by {existing}")]
    PositionOccupied { position: Position, existing: Value },

    #[error("game already finished: {result}")]
    GameAlreadyFinished { result: GameResult },

    #[error("both players are playing {value}")]
    MatchingPlayerValues { value: Side },

    #[error(
        "players ({player_one}, {player_two}) do not match game type {game_type} (expected {})",
        game_type.label()
    )]
    InvalidPlayerCombination {
        player_one: PlayerKind,
        player_two: PlayerKind,
        game_type: GameType,
    },

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("a person is to move; their move must be supplied")]
    PersonToMove,

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("unknown game type '{input}'. Expected one of: {expected}")]
    UnknownGameType { input: String, expected: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
