//! Players of a game
//!
//! A [`Person`] only applies moves supplied from outside. The automata,
//! [`RandomAutomaton`] and [`Menace`], pick their own moves through the
//! [`Automaton`] port. [`Player`] ties the three together so a game can hold
//! any of them.

pub mod person;
pub mod random;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use person::Person;
pub use random::RandomAutomaton;

pub use crate::{menace::Menace, ports::Automaton};
use crate::{
    Result,
    tictactoe::{Board, Position, Side},
};

/// The concrete kind of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    Person,
    Minimax,
    Random,
}

impl PlayerKind {
    pub fn is_automaton(self) -> bool {
        self != PlayerKind::Person
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Person => f.write_str("person"),
            PlayerKind::Minimax => f.write_str("minimax"),
            PlayerKind::Random => f.write_str("random"),
        }
    }
}

/// Any participant in a game
#[derive(Debug)]
pub enum Player {
    Person(Person),
    Random(RandomAutomaton),
    Minimax(Menace),
}

impl Player {
    pub fn person(side: Side) -> Self {
        Player::Person(Person::new(side))
    }

    pub fn random(side: Side) -> Self {
        Player::Random(RandomAutomaton::new(side))
    }

    pub fn minimax(side: Side) -> Self {
        Player::Minimax(Menace::new(side))
    }

    /// The side this player places
    pub fn side(&self) -> Side {
        match self {
            Player::Person(person) => person.side(),
            Player::Random(random) => random.side(),
            Player::Minimax(menace) => menace.side(),
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Person(_) => PlayerKind::Person,
            Player::Random(_) => PlayerKind::Random,
            Player::Minimax(_) => PlayerKind::Minimax,
        }
    }

    /// Place this player's side at `position`.
    ///
    /// # Errors
    ///
    /// Propagates any rejection from [`Board::assign`].
    pub fn make_move(&self, board: &mut Board, position: Position) -> Result<()> {
        board.assign(position, self.side().value())
    }

    /// Positions where a move can currently be made on `board`
    pub fn legal_moves(&self, board: &Board) -> Vec<Position> {
        board.empty_positions()
    }

    /// Access the automaton behind this player, if it is one
    pub fn automaton_mut(&mut self) -> Option<&mut dyn Automaton> {
        match self {
            Player::Person(_) => None,
            Player::Random(random) => Some(random),
            Player::Minimax(menace) => Some(menace),
        }
    }

    pub fn as_menace_mut(&mut self) -> Option<&mut Menace> {
        match self {
            Player::Minimax(menace) => Some(menace),
            _ => None,
        }
    }
}

impl From<Person> for Player {
    fn from(person: Person) -> Self {
        Player::Person(person)
    }
}

impl From<RandomAutomaton> for Player {
    fn from(random: RandomAutomaton) -> Self {
        Player::Random(random)
    }
}

impl From<Menace> for Player {
    fn from(menace: Menace) -> Self {
        Player::Minimax(menace)
    }
}
