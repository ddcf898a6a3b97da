//! Cell positions on the 3x3 board

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the nine cells, laid out row-major from the top left
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleMiddle,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Position {
    /// All positions in board order
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopMiddle,
        Position::TopRight,
        Position::MiddleLeft,
        Position::MiddleMiddle,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomMiddle,
        Position::BottomRight,
    ];

    /// Linear index (0-8)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position for a linear index, or `None` when out of range
    pub fn from_index(index: usize) -> Option<Position> {
        Self::ALL.get(index).copied()
    }

    /// Row (0 = top)
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column (0 = left)
    pub const fn column(self) -> usize {
        self.index() % 3
    }

    /// Position at a row and column, both 0-2
    pub fn from_row_column(row: usize, column: usize) -> Option<Position> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// The following position in board order; `None` after the bottom right
    pub fn next(self) -> Option<Position> {
        Self::from_index(self.index() + 1)
    }

    /// Human readable name, e.g. "top left"
    pub fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "top left",
            Position::TopMiddle => "top middle",
            Position::TopRight => "top right",
            Position::MiddleLeft => "middle left",
            Position::MiddleMiddle => "middle middle",
            Position::MiddleRight => "middle right",
            Position::BottomLeft => "bottom left",
            Position::BottomMiddle => "bottom middle",
            Position::BottomRight => "bottom right",
        }
    }
}

impl TryFrom<usize> for Position {
    type Error = crate::Error;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Position::from_index(index).ok_or(crate::Error::InvalidPosition { position: index })
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> usize {
        position.index()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
