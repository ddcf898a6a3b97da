//! The minimax automaton and its search cache

pub mod advice;
pub mod agent;
pub mod transposition;

pub use advice::{Advice, advise};
pub use agent::{DRAW, LOSS, Menace, WIN, optimal_positions};
pub use transposition::{Bound, CacheEntry, CacheStats, TranspositionTable};
