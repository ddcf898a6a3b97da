//! Tallying and running batches of automaton games

pub mod simulation;
pub mod stats;

pub use simulation::Simulation;
pub use stats::ResultTally;
