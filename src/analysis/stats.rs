//! Statistics over finished games

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameResult, Side};

/// Counts of results over a batch of games
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTally {
    pub cross_wins: usize,
    pub nought_wins: usize,
    pub draws: usize,
    /// Number of games ending after each play count
    pub length_histogram: BTreeMap<usize, usize>,
}

impl ResultTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game of `plays` moves; unfinished results are ignored
    pub fn record(&mut self, result: GameResult, plays: usize) {
        match result {
            GameResult::CrossWins => self.cross_wins += 1,
            GameResult::NoughtWins => self.nought_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::NotWon => return,
        }
        *self.length_histogram.entry(plays).or_insert(0) += 1;
    }

    pub fn total(&self) -> usize {
        self.cross_wins + self.nought_wins + self.draws
    }

    pub fn wins(&self, side: Side) -> usize {
        match side {
            Side::Cross => self.cross_wins,
            Side::Nought => self.nought_wins,
        }
    }

    /// Fraction of games won by `side`, 0 when nothing was recorded
    pub fn win_rate(&self, side: Side) -> f64 {
        Self::rate(self.wins(side), self.total())
    }

    pub fn draw_rate(&self) -> f64 {
        Self::rate(self.draws, self.total())
    }

    pub fn average_length(&self) -> f64 {
        let plays: usize = self
            .length_histogram
            .iter()
            .map(|(plays, count)| plays * count)
            .sum();
        Self::rate(plays, self.total())
    }

    fn rate(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }
}

impl fmt::Display for ResultTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X wins {}, O wins {}, draws {} ({} games)",
            self.cross_wins,
            self.nought_wins,
            self.draws,
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_rates() {
        let mut tally = ResultTally::new();
        tally.record(GameResult::CrossWins, 5);
        tally.record(GameResult::Draw, 9);
        tally.record(GameResult::Draw, 9);
        tally.record(GameResult::NotWon, 3);

        assert_eq!(tally.total(), 3);
        assert_eq!(tally.wins(Side::Cross), 1);
        assert_eq!(tally.wins(Side::Nought), 0);
        assert!((tally.draw_rate() - 2.0 / 3.0).abs() < 1e-12);
        assert!((tally.average_length() - 23.0 / 3.0).abs() < 1e-12);
        assert_eq!(tally.length_histogram.get(&9), Some(&2));
    }

    #[test]
    fn test_empty_tally_rates_are_zero() {
        let tally = ResultTally::new();
        assert_eq!(tally.win_rate(Side::Cross), 0.0);
        assert_eq!(tally.average_length(), 0.0);
    }

    #[test]
    fn test_display() {
        let mut tally = ResultTally::new();
        tally.record(GameResult::NoughtWins, 6);
        tally.record(GameResult::NoughtWins, 8);
        tally.record(GameResult::CrossWins, 7);
        assert_eq!(tally.to_string(), "X wins 1, O wins 2, draws 0 (3 games)");
    }
}
