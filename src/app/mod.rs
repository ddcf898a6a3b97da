//! Application layer: wiring players and games from configuration.
//!
//! The CLI never constructs automata directly. It describes what it wants
//! with an [`AutomatonConfig`] and asks the [`App`] for players, so seeding
//! is decided in one place.
//!
//! # Usage
//!
//! ```
//! use noughts::app::{App, AutomatonConfig};
//! use noughts::tictactoe::{Board, Game, GameType, GameResult};
//!
//! let app = App::new();
//! let config = AutomatonConfig::new().with_seed(42);
//! let [first, second] = app.create_players(GameType::MvM, &config);
//!
//! let mut board = Board::new();
//! let mut game = Game::new(&mut board, first, second, GameType::MvM)?;
//! assert_eq!(game.play_out()?, GameResult::Draw);
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::AutomatonConfig;
pub use container::{App, create_player};
