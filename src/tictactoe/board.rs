//! Board state representation and basic operations

use std::{
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    ops::Index,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, position::Position, symmetry::D4Transform};

/// Content of a cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Empty,
    Cross,
    Nought,
}

impl Value {
    pub fn to_char(self) -> char {
        match self {
            Value::Empty => '.',
            Value::Cross => 'X',
            Value::Nought => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            '.' | ' ' | '_' => Some(Value::Empty),
            'X' | 'x' => Some(Value::Cross),
            'O' | 'o' | '0' => Some(Value::Nought),
            _ => None,
        }
    }

    /// The side owning this value, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Value::Empty => None,
            Value::Cross => Some(Side::Cross),
            Value::Nought => Some(Side::Nought),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => f.write_str("empty"),
            Value::Cross => f.write_str("X"),
            Value::Nought => f.write_str("O"),
        }
    }
}

/// One of the two sides a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Cross,
    Nought,
}

impl Side {
    /// Get the opposing side
    pub fn opponent(self) -> Side {
        match self {
            Side::Cross => Side::Nought,
            Side::Nought => Side::Cross,
        }
    }

    /// Convert side to the cell value it places
    pub fn value(self) -> Value {
        match self {
            Side::Cross => Value::Cross,
            Side::Nought => Value::Nought,
        }
    }

    /// The result recorded when this side completes a line
    pub fn win(self) -> GameResult {
        match self {
            Side::Cross => GameResult::CrossWins,
            Side::Nought => GameResult::NoughtWins,
        }
    }
}

impl From<Side> for Value {
    fn from(side: Side) -> Value {
        side.value()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}

impl FromStr for Side {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "cross" | "crosses" => Ok(Side::Cross),
            "o" | "nought" | "noughts" | "naught" => Ok(Side::Nought),
            other => Err(crate::Error::InvalidConfiguration {
                message: format!("unknown side '{other}' (expected 'x' or 'o')"),
            }),
        }
    }
}

/// Result of a game, computed purely from the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    NotWon,
    CrossWins,
    NoughtWins,
    Draw,
}

impl GameResult {
    /// The winning side, if any
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::CrossWins => Some(Side::Cross),
            GameResult::NoughtWins => Some(Side::Nought),
            GameResult::NotWon | GameResult::Draw => None,
        }
    }

    /// Whether no further moves may be made
    pub fn is_finished(self) -> bool {
        self != GameResult::NotWon
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::NotWon => f.write_str("not won"),
            GameResult::CrossWins => f.write_str("X wins"),
            GameResult::NoughtWins => f.write_str("O wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// A single cell yielded while traversing a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardElement {
    pub value: Value,
    pub position: Position,
    pub index: usize,
}

impl BoardElement {
    /// # Panics
    ///
    /// Panics if `position` and `index` disagree.
    pub fn new(value: Value, position: Position, index: usize) -> Self {
        assert_eq!(
            position.index(),
            index,
            "board element position {position} does not match index {index}"
        );
        BoardElement {
            value,
            position,
            index,
        }
    }
}

/// Read-only traversal over the cells of a board in board order
#[derive(Debug, Clone)]
pub struct BoardIter<'a> {
    board: &'a Board,
    next: usize,
}

impl Iterator for BoardIter<'_> {
    type Item = BoardElement;

    fn next(&mut self) -> Option<Self::Item> {
        let position = Position::from_index(self.next)?;
        let element = BoardElement::new(self.board.get(position), position, self.next);
        self.next += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 9 - self.next.min(9);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoardIter<'_> {}

impl FusedIterator for BoardIter<'_> {}

/// The 3x3 game board
///
/// Boards are plain values: copying one gives an independent snapshot.
/// Equality is taken up to the eight rotations and reflections of the
/// square, and hashing agrees with it by hashing the canonical form.
#[derive(Debug, Clone, Copy)]
pub struct Board {
    cells: [Value; 9],
    plays: u8,
    cross_count: u8,
    nought_count: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Value::Empty; 9],
            plays: 0,
            cross_count: 0,
            nought_count: 0,
        }
    }

    /// Build a board directly from its cells.
    pub fn from_cells(cells: [Value; 9]) -> Self {
        let mut board = Board {
            cells,
            ..Board::new()
        };
        for cell in cells {
            match cell {
                Value::Cross => board.cross_count += 1,
                Value::Nought => board.nought_count += 1,
                Value::Empty => continue,
            }
            board.plays += 1;
        }
        board
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; the first nine remaining characters are read as
    /// cells (`.`/`_` empty, `X`, `O`).
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cells are given or a character is not a
    /// valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Value::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Value::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board::from_cells(cells))
    }

    /// Place `value` on an empty `position`.
    ///
    /// # Errors
    ///
    /// - [`EmptyValueRejected`] if `value` is [`Value::Empty`]
    /// - [`PositionOccupied`] if the cell already holds a value
    /// - [`GameAlreadyFinished`] if the board is already won or drawn
    ///
    /// [`EmptyValueRejected`]: crate::Error::EmptyValueRejected
    /// [`PositionOccupied`]: crate::Error::PositionOccupied
    /// [`GameAlreadyFinished`]: crate::Error::GameAlreadyFinished
    pub fn assign(&mut self, position: Position, value: Value) -> Result<(), crate::Error> {
        let side = value
            .side()
            .ok_or(crate::Error::EmptyValueRejected { position })?;
        let existing = self.get(position);
        if existing != Value::Empty {
            return Err(crate::Error::PositionOccupied { position, existing });
        }
        let result = self.check_result();
        if result.is_finished() {
            return Err(crate::Error::GameAlreadyFinished { result });
        }

        self.cells[position.index()] = value;
        self.plays += 1;
        match side {
            Side::Cross => self.cross_count += 1,
            Side::Nought => self.nought_count += 1,
        }
        Ok(())
    }

    /// Copy the board and place `side` at `position` on the copy
    #[must_use = "with_move returns a new board; the original is unchanged"]
    pub fn with_move(&self, position: Position, side: Side) -> Result<Board, crate::Error> {
        let mut child = *self;
        child.assign(position, side.value())?;
        Ok(child)
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// Determine whether the game is won, drawn, or still open
    pub fn check_result(&self) -> GameResult {
        // a line needs at least five moves between both sides
        if self.plays < 5 {
            return GameResult::NotWon;
        }
        if let Some(side) = LineAnalyzer::winner(&self.cells) {
            return side.win();
        }
        if self.plays == 9 {
            GameResult::Draw
        } else {
            GameResult::NotWon
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_finished(&self) -> bool {
        self.check_result().is_finished()
    }

    /// Number of moves made
    pub fn plays(&self) -> usize {
        usize::from(self.plays)
    }

    pub fn cross_count(&self) -> usize {
        usize::from(self.cross_count)
    }

    pub fn nought_count(&self) -> usize {
        usize::from(self.nought_count)
    }

    pub fn cells(&self) -> &[Value; 9] {
        &self.cells
    }

    /// Get cell at position
    pub fn get(&self, position: Position) -> Value {
        self.cells[position.index()]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Value::Empty
    }

    /// Get all empty positions in board order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|element| element.value == Value::Empty)
            .map(|element| element.position)
            .collect()
    }

    /// Traverse the cells in board order
    pub fn iter(&self) -> BoardIter<'_> {
        BoardIter {
            board: self,
            next: 0,
        }
    }

    /// Rotate the board `n` quarter turns counter-clockwise
    pub fn rotate(&mut self, n: i32) {
        self.cells = D4Transform::new(n, false).apply_to_cells(&self.cells);
    }

    /// Reflect the board about its vertical axis when `n` is odd
    pub fn reflect(&mut self, n: i32) {
        self.cells = D4Transform::new(0, n.rem_euclid(2) == 1).apply_to_cells(&self.cells);
    }

    #[must_use = "rotated returns a new board; the original is unchanged"]
    pub fn rotated(&self, n: i32) -> Board {
        let mut board = *self;
        board.rotate(n);
        board
    }

    #[must_use = "reflected returns a new board; the original is unchanged"]
    pub fn reflected(&self, n: i32) -> Board {
        let mut board = *self;
        board.reflect(n);
        board
    }

    /// Apply a symmetry transform to the board
    #[must_use = "transform returns a new board; the original is unchanged"]
    pub fn transform(&self, transform: &D4Transform) -> Board {
        Board {
            cells: transform.apply_to_cells(&self.cells),
            ..*self
        }
    }

    /// Exact cell-for-cell comparison, ignoring symmetry
    pub fn cells_eq(&self, other: &Board) -> bool {
        self.cells == other.cells
    }

    /// The lexicographically least cell layout over all eight symmetries
    pub fn canonical_cells(&self) -> [Value; 9] {
        D4Transform::all()
            .iter()
            .map(|t| t.apply_to_cells(&self.cells))
            .min()
            .unwrap_or(self.cells)
    }

    /// Compact string form, one character per cell
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        // differing piece counts can never be symmetric
        if self.cross_count != other.cross_count || self.nought_count != other.nought_count {
            return false;
        }
        D4Transform::all()
            .iter()
            .any(|t| t.apply_to_cells(&self.cells) == other.cells)
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_cells().hash(state);
    }
}

impl Index<Position> for Board {
    type Output = Value;

    fn index(&self, position: Position) -> &Value {
        &self.cells[position.index()]
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = BoardElement;
    type IntoIter = BoardIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
