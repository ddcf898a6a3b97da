//! Configuration types for player creation.

use serde::{Deserialize, Serialize};

use crate::tictactoe::Side;

/// Configuration for creating automata.
///
/// # Examples
///
/// ```
/// use noughts::app::AutomatonConfig;
/// use noughts::tictactoe::Side;
///
/// let config = AutomatonConfig::new().with_seed(42).with_first_side(Side::Nought);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Side taken by the player in the first seat
    pub first_side: Side,
}

impl AutomatonConfig {
    /// Non-deterministic automata, Cross in the first seat
    pub fn new() -> Self {
        Self {
            seed: None,
            first_side: Side::Cross,
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }

    /// Seed for the automaton playing `side`.
    ///
    /// Both seats derive from one seed but never share a stream.
    pub fn seed_for(&self, side: Side) -> Option<u64> {
        self.seed.map(|seed| match side {
            Side::Cross => seed,
            Side::Nought => seed.wrapping_add(0x9e37_79b9_7f4a_7c15),
        })
    }
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self::new()
    }
}
