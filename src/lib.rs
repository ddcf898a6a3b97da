//! Noughts and crosses against a minimax automaton
//!
//! This crate provides:
//! - A Tic-Tac-Toe board whose equality respects the eight symmetries of the square
//! - People, uniform random automata, and an unbeatable minimax automaton (MENACE)
//!   with a transposition cache
//! - Games between any pairing of the three, validated against a game type
//! - Batch simulation and result tallies

pub mod analysis;
pub mod app;
pub mod cli;
pub mod error;
pub mod menace;
pub mod player;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use menace::{Menace, advise};
pub use player::{Player, PlayerKind};
pub use tictactoe::{Board, Game, GameResult, GameType, Position, Side, Value};
