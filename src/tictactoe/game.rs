//! High-level game management

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Board, GameResult, Position};
use crate::{
    Error, Result,
    player::{Player, PlayerKind},
};

/// Which kinds of player take the first and second seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    PvP,
    PvM,
    MvP,
    MvM,
    RvR,
    MvR,
    RvM,
    RvP,
    PvR,
}

impl GameType {
    pub const ALL: [GameType; 9] = [
        GameType::PvP,
        GameType::PvM,
        GameType::MvP,
        GameType::MvM,
        GameType::RvR,
        GameType::MvR,
        GameType::RvM,
        GameType::RvP,
        GameType::PvR,
    ];

    /// Required kinds of the (first, second) player
    pub fn expected_kinds(self) -> (PlayerKind, PlayerKind) {
        use PlayerKind::{Minimax, Person, Random};
        match self {
            GameType::PvP => (Person, Person),
            GameType::PvM => (Person, Minimax),
            GameType::MvP => (Minimax, Person),
            GameType::MvM => (Minimax, Minimax),
            GameType::RvR => (Random, Random),
            GameType::MvR => (Minimax, Random),
            GameType::RvM => (Random, Minimax),
            GameType::RvP => (Random, Person),
            GameType::PvR => (Person, Random),
        }
    }

    /// Whether either seat is taken by a person
    pub fn includes_person(self) -> bool {
        let (first, second) = self.expected_kinds();
        first == PlayerKind::Person || second == PlayerKind::Person
    }

    /// Long form, e.g. `person-vs-minimax`
    pub fn label(self) -> String {
        let (first, second) = self.expected_kinds();
        format!("{first}-vs-{second}")
    }

    fn code(self) -> &'static str {
        match self {
            GameType::PvP => "pvp",
            GameType::PvM => "pvm",
            GameType::MvP => "mvp",
            GameType::MvM => "mvm",
            GameType::RvR => "rvr",
            GameType::MvR => "mvr",
            GameType::RvM => "rvm",
            GameType::RvP => "rvp",
            GameType::PvR => "pvr",
        }
    }

    /// Word pairs understood besides the codes and labels
    fn from_words(first: &str, second: &str) -> Option<GameType> {
        let game_type = match (first, second) {
            ("person", "person") => GameType::PvP,
            ("menace" | "minimax", "second") | ("person", "menace" | "minimax") => GameType::PvM,
            ("menace" | "minimax", "first" | "person") => GameType::MvP,
            ("menace" | "minimax", "itself" | "menace" | "minimax") => GameType::MvM,
            ("random", "itself" | "random") => GameType::RvR,
            ("menace" | "minimax", "random") => GameType::MvR,
            ("random", "menace" | "minimax") => GameType::RvM,
            ("random", "first" | "person") => GameType::RvP,
            ("random", "second") | ("person", "random") => GameType::PvR,
            _ => return None,
        };
        Some(game_type)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameType {
    type Err = Error;

    /// Accepts codes (`mvr`), labels (`minimax-vs-random`), word pairs
    /// (`menace first`) and the single words `person`, `menace` and `random`.
    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase();
        let unknown = || Error::UnknownGameType {
            input: s.to_string(),
            expected: GameType::ALL
                .iter()
                .map(|game_type| game_type.code())
                .collect::<Vec<_>>()
                .join(", "),
        };

        if let Some(game_type) = GameType::ALL
            .into_iter()
            .find(|game_type| game_type.code() == normalised || game_type.label() == normalised)
        {
            return Ok(game_type);
        }

        let words: Vec<&str> = normalised
            .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
            .filter(|word| !word.is_empty() && *word != "vs")
            .collect();
        match words.as_slice() {
            ["person"] => Ok(GameType::PvP),
            ["menace" | "minimax"] => Ok(GameType::PvM),
            ["random"] => Ok(GameType::PvR),
            [first, second] => GameType::from_words(first, second).ok_or_else(unknown),
            _ => Err(unknown()),
        }
    }
}

/// A game between two players on a borrowed board
///
/// The first player moves whenever an even number of plays has been made,
/// the second otherwise. The board may be supplied part-played.
#[derive(Debug)]
pub struct Game<'a> {
    board: &'a mut Board,
    players: [Player; 2],
    game_type: GameType,
}

impl<'a> Game<'a> {
    /// Set up a game, checking the players suit `game_type`.
    ///
    /// # Errors
    ///
    /// - [`Error::MatchingPlayerValues`] if both players take the same side
    /// - [`Error::InvalidPlayerCombination`] if a player's kind is not the one
    ///   `game_type` requires for its seat
    pub fn new(
        board: &'a mut Board,
        player_one: Player,
        player_two: Player,
        game_type: GameType,
    ) -> Result<Self> {
        if player_one.side() == player_two.side() {
            return Err(Error::MatchingPlayerValues {
                value: player_one.side(),
            });
        }

        let (first, second) = game_type.expected_kinds();
        if player_one.kind() != first || player_two.kind() != second {
            return Err(Error::InvalidPlayerCombination {
                player_one: player_one.kind(),
                player_two: player_two.kind(),
                game_type,
            });
        }

        debug!(
            %game_type,
            first = %player_one.side(),
            plays = board.plays(),
            "game created"
        );
        Ok(Self {
            board,
            players: [player_one, player_two],
            game_type,
        })
    }

    /// Play `position` for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Propagates [`Board::assign`] errors unchanged.
    pub fn play(&mut self, position: Position) -> Result<()> {
        let index = self.current_index();
        self.players[index].make_move(self.board, position)?;

        let result = self.board.check_result();
        if result.is_finished() {
            debug!(
                game_type = %self.game_type,
                %result,
                plays = self.board.plays(),
                "game finished"
            );
        }
        Ok(())
    }

    /// Number of plays made on the board
    pub fn get_plays(&self) -> usize {
        self.board.plays()
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_index()]
    }

    pub fn result(&self) -> GameResult {
        self.board.check_result()
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Mutable access to the first (0) or second (1) player
    pub fn player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// End the game, handing the players back so automata keep their caches
    pub fn into_players(self) -> [Player; 2] {
        self.players
    }

    /// Let the automaton whose turn it is make its move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameAlreadyFinished`] if the game is over
    /// - [`Error::PersonToMove`] if a person is to move
    pub fn step(&mut self) -> Result<Position> {
        let result = self.board.check_result();
        if result.is_finished() {
            return Err(Error::GameAlreadyFinished { result });
        }

        let index = self.current_index();
        let automaton = self.players[index]
            .automaton_mut()
            .ok_or(Error::PersonToMove)?;
        let position = automaton.get_move(self.board)?;
        self.play(position)?;
        Ok(position)
    }

    /// Step until the game is finished and return its result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonToMove`] before any move is made if either
    /// player is a person.
    pub fn play_out(&mut self) -> Result<GameResult> {
        if self.players.iter().any(|player| !player.kind().is_automaton()) {
            return Err(Error::PersonToMove);
        }
        while !self.board.is_finished() {
            self.step()?;
        }
        Ok(self.board.check_result())
    }

    fn current_index(&self) -> usize {
        self.board.plays() % 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Side;

    const DRAW_ONE: [Position; 9] = [
        Position::BottomLeft,
        Position::MiddleMiddle,
        Position::TopMiddle,
        Position::MiddleRight,
        Position::MiddleLeft,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomMiddle,
        Position::TopRight,
    ];

    fn player(kind: PlayerKind, side: Side) -> Player {
        match kind {
            PlayerKind::Person => Player::person(side),
            PlayerKind::Random => Player::random(side),
            PlayerKind::Minimax => Player::minimax(side),
        }
    }

    #[test]
    fn test_matching_sides_rejected() {
        for side in [Side::Cross, Side::Nought] {
            let mut board = Board::new();
            let err = Game::new(
                &mut board,
                Player::person(side),
                Player::person(side),
                GameType::PvP,
            )
            .unwrap_err();
            assert_eq!(err, Error::MatchingPlayerValues { value: side });
        }
    }

    #[test]
    fn test_every_kind_combination_against_every_game_type() {
        let kinds = [PlayerKind::Person, PlayerKind::Minimax, PlayerKind::Random];
        for game_type in GameType::ALL {
            let mut accepted = 0;
            for first in kinds {
                for second in kinds {
                    let mut board = Board::new();
                    let outcome = Game::new(
                        &mut board,
                        player(first, Side::Cross),
                        player(second, Side::Nought),
                        game_type,
                    );
                    if (first, second) == game_type.expected_kinds() {
                        assert!(outcome.is_ok(), "{game_type} rejected {first} v {second}");
                        accepted += 1;
                    } else {
                        assert_eq!(
                            outcome.unwrap_err(),
                            Error::InvalidPlayerCombination {
                                player_one: first,
                                player_two: second,
                                game_type,
                            }
                        );
                    }
                }
            }
            assert_eq!(accepted, 1);
        }
    }

    #[test]
    fn test_game_play_counts_plays() {
        let mut board = Board::new();
        let mut game = Game::new(
            &mut board,
            Player::person(Side::Cross),
            Player::person(Side::Nought),
            GameType::PvP,
        )
        .unwrap();
        assert_eq!(game.get_plays(), 0);
        for (i, position) in DRAW_ONE.iter().enumerate() {
            let expected = if i % 2 == 0 { Side::Cross } else { Side::Nought };
            assert_eq!(game.current_player().side(), expected);
            game.play(*position).unwrap();
            assert_eq!(game.get_plays(), i + 1);
        }
        assert_eq!(game.result(), GameResult::Draw);
        drop(game);
        assert_eq!(board.plays(), 9);
    }

    #[test]
    fn test_board_errors_propagate() {
        let mut board = Board::new();
        let mut game = Game::new(
            &mut board,
            Player::person(Side::Cross),
            Player::person(Side::Nought),
            GameType::PvP,
        )
        .unwrap();
        game.play(Position::MiddleMiddle).unwrap();
        assert_eq!(
            game.play(Position::MiddleMiddle),
            Err(Error::PositionOccupied {
                position: Position::MiddleMiddle,
                existing: crate::tictactoe::Value::Cross,
            })
        );
        assert_eq!(game.get_plays(), 1);
    }

    #[test]
    fn test_nought_may_take_the_first_seat() {
        let mut board = Board::new();
        let mut game = Game::new(
            &mut board,
            Player::person(Side::Nought),
            Player::person(Side::Cross),
            GameType::PvP,
        )
        .unwrap();
        game.play(Position::TopLeft).unwrap();
        assert_eq!(
            game.board().get(Position::TopLeft),
            crate::tictactoe::Value::Nought
        );
    }

    #[test]
    fn test_step_refuses_person() {
        let mut board = Board::new();
        let mut game = Game::new(
            &mut board,
            Player::person(Side::Cross),
            Player::minimax(Side::Nought),
            GameType::PvM,
        )
        .unwrap();
        assert_eq!(game.step(), Err(Error::PersonToMove));
        assert_eq!(game.play_out(), Err(Error::PersonToMove));
        game.play(Position::TopLeft).unwrap();
        assert_eq!(game.step(), Ok(Position::MiddleMiddle));
    }

    #[test]
    fn test_minimax_against_itself_draws() {
        let mut board = Board::new();
        let mut game = Game::new(
            &mut board,
            Player::minimax(Side::Cross),
            Player::minimax(Side::Nought),
            GameType::MvM,
        )
        .unwrap();
        assert_eq!(game.play_out(), Ok(GameResult::Draw));
        let result = game.result();
        assert_eq!(
            game.step(),
            Err(Error::GameAlreadyFinished { result })
        );
    }

    #[test]
    fn test_players_outlive_the_game() {
        let mut board = Board::new();
        let mut game = Game::new(
            &mut board,
            Player::minimax(Side::Cross),
            Player::random(Side::Nought),
            GameType::MvR,
        )
        .unwrap();
        game.play_out().unwrap();
        let [mut first, _] = game.into_players();
        assert!(first.as_menace_mut().unwrap().cache_len() > 0);
    }

    #[test]
    fn test_parse_game_types() {
        for game_type in GameType::ALL {
            assert_eq!(game_type.to_string().parse::<GameType>(), Ok(game_type));
            assert_eq!(game_type.label().parse::<GameType>(), Ok(game_type));
        }
        assert_eq!("PvM".parse::<GameType>(), Ok(GameType::PvM));
        assert_eq!("menace first".parse::<GameType>(), Ok(GameType::MvP));
        assert_eq!("menace second".parse::<GameType>(), Ok(GameType::PvM));
        assert_eq!("random itself".parse::<GameType>(), Ok(GameType::RvR));
        assert_eq!("person".parse::<GameType>(), Ok(GameType::PvP));
        assert_eq!("random".parse::<GameType>(), Ok(GameType::PvR));
        assert!(matches!(
            "chess".parse::<GameType>(),
            Err(Error::UnknownGameType { .. })
        ));
    }

    #[test]
    fn test_person_games() {
        let with_person: Vec<_> = GameType::ALL
            .into_iter()
            .filter(|game_type| game_type.includes_person())
            .collect();
        assert_eq!(
            with_person,
            vec![
                GameType::PvP,
                GameType::PvM,
                GameType::MvP,
                GameType::RvP,
                GameType::PvR
            ]
        );
        assert_eq!(GameType::RvM.label(), "random-vs-minimax");
    }
}
