//! Advise command - score every move on a position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{print_board, print_kv, print_section},
    menace::Advice,
    tictactoe::{Board, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Recommend a move for a position")]
pub struct AdviseArgs {
    /// Nine cells row by row, `X`, `O` or `.` (e.g. "X...O....")
    pub board: Board,

    /// Side to advise; inferred from the piece counts when omitted
    #[arg(long)]
    pub side: Option<Side>,

    /// Random seed for breaking ties between equal moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AdviseArgs) -> Result<()> {
    let board = args.board;
    let side = args.side.unwrap_or_else(|| side_to_move(&board));
    let advice = Advice::analyse(&board, side, args.seed.unwrap_or_else(rand::random))
        .with_context(|| format!("cannot advise {side} on {}", board.encode()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
        return Ok(());
    }

    print_section(&format!("Advice for {side}"));
    print_board(&board);
    println!();
    for (position, score) in &advice.scores {
        let verdict = match score {
            1 => "win",
            0 => "draw",
            _ => "loss",
        };
        print_kv(position.name(), &format!("{score:+} ({verdict})"));
    }
    println!();
    print_kv("Recommended", advice.position.name());
    print_board(&advice.apply_to(&board)?);

    Ok(())
}

/// Cross moves first unless it already has more pieces on the board
fn side_to_move(board: &Board) -> Side {
    if board.cross_count() > board.nought_count() {
        Side::Nought
    } else {
        Side::Cross
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(&Board::new()), Side::Cross);
        let board: Board = "X........".parse().unwrap();
        assert_eq!(side_to_move(&board), Side::Nought);
    }
}
