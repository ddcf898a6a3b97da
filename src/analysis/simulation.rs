//! Batches of automaton-only games
//!
//! The same two players are reused for every game of a batch, so a minimax
//! automaton's cache carries over from one game to the next.

use tracing::debug;

use super::ResultTally;
use crate::{
    Error, Result,
    app::{App, AutomatonConfig},
    tictactoe::{Board, Game, GameType},
};

/// A batch of games of one type
#[derive(Debug, Clone)]
pub struct Simulation {
    pub game_type: GameType,
    pub games: usize,
    pub config: AutomatonConfig,
}

impl Simulation {
    pub fn new(game_type: GameType, games: usize) -> Self {
        Self {
            game_type,
            games,
            config: AutomatonConfig::new(),
        }
    }

    pub fn with_config(mut self, config: AutomatonConfig) -> Self {
        self.config = config;
        self
    }

    /// Play every game, calling `on_game` with the running tally after each.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonToMove`] if the game type seats a person.
    pub fn run<F>(&self, app: &App, mut on_game: F) -> Result<ResultTally>
    where
        F: FnMut(&ResultTally),
    {
        if self.game_type.includes_person() {
            return Err(Error::PersonToMove);
        }

        let mut players = app.create_players(self.game_type, &self.config);
        let mut tally = ResultTally::new();

        for game_index in 0..self.games {
            let mut board = Board::new();
            let [first, second] = players;
            let mut game = Game::new(&mut board, first, second, self.game_type)?;
            let result = game.play_out()?;
            players = game.into_players();

            tally.record(result, board.plays());
            debug!(game_index, %result, plays = board.plays(), "simulated game");
            on_game(&tally);
        }

        Ok(tally)
    }
}
