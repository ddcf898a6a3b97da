//! Show command - play one automaton game move by move

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    app::{App, AutomatonConfig},
    cli::output::{describe_result, print_board, print_section},
    tictactoe::{Board, Game, GameType},
};

#[derive(Parser, Debug)]
#[command(about = "Play a single automaton game, printing every position")]
pub struct ShowArgs {
    /// Game type, e.g. mvm or rvm
    pub game_type: GameType,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    if args.game_type.includes_person() {
        bail!(
            "game type '{}' needs a person; use `noughts play` instead",
            args.game_type.label()
        );
    }

    let mut config = AutomatonConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let [first, second] = App::new().create_players(args.game_type, &config);

    let mut board = Board::new();
    let mut game = Game::new(&mut board, first, second, args.game_type)?;
    print_section(&format!("Game: {}", args.game_type.label()));

    while !game.result().is_finished() {
        let side = game.current_player().side();
        let kind = game.current_player().kind();
        let position = game.step()?;
        println!("\nPlay {}: {side} ({kind}) takes {position}", game.get_plays());
        print_board(game.board());
    }

    println!("\nResult: {}", describe_result(game.board()));
    Ok(())
}
