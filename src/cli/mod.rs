//! CLI infrastructure for the noughts binary
//!
//! Simulating automaton games, advising on positions, and showing a single
//! game move by move.

pub mod commands;
pub mod output;
