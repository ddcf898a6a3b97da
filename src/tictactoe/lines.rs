//! Winning line analysis for Tic-Tac-Toe

use super::{Position, Side, Value};

/// Winning lines, checked in this order
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // rows
    [Position::TopLeft, Position::TopMiddle, Position::TopRight],
    [Position::MiddleLeft, Position::MiddleMiddle, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomMiddle, Position::BottomRight],
    // columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopMiddle, Position::MiddleMiddle, Position::BottomMiddle],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // diagonals
    [Position::TopLeft, Position::MiddleMiddle, Position::BottomRight],
    [Position::BottomLeft, Position::MiddleMiddle, Position::TopRight],
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The first completed line, if any
    pub fn winning_line(cells: &[Value; 9]) -> Option<[Position; 3]> {
        WINNING_LINES
            .iter()
            .find(|line| Self::line_owner(cells, line).is_some())
            .copied()
    }

    /// The side owning the first completed line, if any
    pub fn winner(cells: &[Value; 9]) -> Option<Side> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    fn line_owner(cells: &[Value; 9], line: &[Position; 3]) -> Option<Side> {
        let first = cells[line[0].index()];
        if line.iter().all(|pos| cells[pos.index()] == first) {
            first.side()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(line: &[Position; 3], value: Value) -> [Value; 9] {
        let mut cells = [Value::Empty; 9];
        for pos in line {
            cells[pos.index()] = value;
        }
        cells
    }

    #[test]
    fn test_every_line_wins_for_either_side() {
        for line in &WINNING_LINES {
            for side in [Side::Cross, Side::Nought] {
                let cells = filled(line, side.value());
                assert_eq!(LineAnalyzer::winner(&cells), Some(side));
                assert_eq!(LineAnalyzer::winning_line(&cells), Some(*line));
            }
        }
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let cells = [Value::Empty; 9];
        assert_eq!(LineAnalyzer::winner(&cells), None);
        assert_eq!(LineAnalyzer::winning_line(&cells), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut cells = filled(&WINNING_LINES[0], Value::Cross);
        cells[Position::TopMiddle.index()] = Value::Nought;
        assert_eq!(LineAnalyzer::winner(&cells), None);
    }

    #[test]
    fn test_rows_are_checked_before_columns() {
        // X X X / X O O / X O O completes the top row and the left column
        let mut cells = filled(&WINNING_LINES[0], Value::Cross);
        cells[Position::MiddleLeft.index()] = Value::Cross;
        cells[Position::BottomLeft.index()] = Value::Cross;
        assert_eq!(LineAnalyzer::winning_line(&cells), Some(WINNING_LINES[0]));
    }
}
