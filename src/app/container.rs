//! Player factory used by the CLI and tests.

use super::config::AutomatonConfig;
use crate::{
    menace::Menace,
    player::{Person, Player, PlayerKind, RandomAutomaton},
    tictactoe::{GameType, Side},
};

/// Build a player of `kind` on `side`, seeded from `config` when it has a seed.
pub fn create_player(kind: PlayerKind, side: Side, config: &AutomatonConfig) -> Player {
    let seed = config.seed_for(side);
    match kind {
        PlayerKind::Person => Player::Person(Person::new(side)),
        PlayerKind::Random => match seed {
            Some(seed) => Player::Random(RandomAutomaton::with_seed(side, seed)),
            None => Player::Random(RandomAutomaton::new(side)),
        },
        PlayerKind::Minimax => match seed {
            Some(seed) => Player::Minimax(Menace::with_seed(side, seed)),
            None => Player::Minimax(Menace::new(side)),
        },
    }
}

/// Application entry point for creating players.
///
/// # Examples
///
/// ```
/// use noughts::app::{App, AutomatonConfig};
/// use noughts::player::PlayerKind;
/// use noughts::tictactoe::Side;
///
/// let app = App::new().with_default_seed(42);
/// let player = app.create_player(PlayerKind::Random, Side::Nought, &AutomatonConfig::new());
/// assert_eq!(player.side(), Side::Nought);
/// ```
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed used whenever a config carries none.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Create a single player, falling back to the app's default seed.
    pub fn create_player(&self, kind: PlayerKind, side: Side, config: &AutomatonConfig) -> Player {
        create_player(kind, side, &self.resolve(config))
    }

    /// Create both players for `game_type`, in seat order.
    ///
    /// The first seat takes `config.first_side`, the second its opponent.
    pub fn create_players(&self, game_type: GameType, config: &AutomatonConfig) -> [Player; 2] {
        let config = self.resolve(config);
        let (first, second) = game_type.expected_kinds();
        [
            create_player(first, config.first_side, &config),
            create_player(second, config.first_side.opponent(), &config),
        ]
    }

    fn resolve(&self, config: &AutomatonConfig) -> AutomatonConfig {
        match (config.seed, self.default_seed) {
            (None, Some(seed)) => config.with_seed(seed),
            _ => *config,
        }
    }
}
