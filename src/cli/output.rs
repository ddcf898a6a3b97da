//! Output formatting and progress bars for CLI

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, GameResult, LineAnalyzer};

/// Create a progress bar for a batch of games
pub fn create_games_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map(|style| style.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print a board indented, one row per line
pub fn print_board(board: &Board) {
    for row in board.to_string().lines() {
        println!("    {row}");
    }
}

/// Write a board indented, one row per line
pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.to_string().lines() {
        writeln!(out, "    {row}")?;
    }
    Ok(())
}

/// Describe a finished board: the result and, for a win, the completed line
pub fn describe_result(board: &Board) -> String {
    let result = board.check_result();
    match (result, LineAnalyzer::winning_line(board.cells())) {
        (GameResult::CrossWins | GameResult::NoughtWins, Some(line)) => {
            let cells: Vec<&str> = line.iter().map(|position| position.name()).collect();
            format!("{result} ({})", cells.join(", "))
        }
        _ => result.to_string(),
    }
}

/// Format a fraction as a percentage with one decimal
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
