//! Ports (trait boundaries) between the game core and its players.
//!
//! The game and the command line depend on these traits rather than on the
//! concrete automata.

pub mod automaton;

pub use automaton::Automaton;
