//! Simulate command - play batches of automaton games

use anyhow::{Result, bail};
use clap::Parser;
use serde::Serialize;

use crate::{
    analysis::{ResultTally, Simulation},
    app::{App, AutomatonConfig},
    cli::output::{create_games_progress, format_percent, print_kv, print_section},
    tictactoe::{GameType, Side},
};

#[derive(Parser, Debug)]
#[command(about = "Play automaton-only games and tally the results")]
pub struct SimulateArgs {
    /// Game type, e.g. mvr, rvm, mvm or rvr
    #[arg(long, short = 't', default_value = "mvr")]
    pub game_type: GameType,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side taken by the first seat (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first_side: Side,

    /// Print the tally as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SimulationReport {
    game_type: GameType,
    first_side: Side,
    seed: Option<u64>,
    tally: ResultTally,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    if args.game_type.includes_person() {
        bail!(
            "game type '{}' needs a person; use `noughts play` instead",
            args.game_type.label()
        );
    }

    let mut config = AutomatonConfig::new().with_first_side(args.first_side);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let simulation = Simulation::new(args.game_type, args.games).with_config(config);

    let progress = (!args.json).then(|| create_games_progress(args.games as u64));
    let tally = simulation.run(&App::new(), |tally| {
        if let Some(pb) = &progress {
            pb.inc(1);
            pb.set_message(tally.to_string());
        }
    })?;
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        let report = SimulationReport {
            game_type: args.game_type,
            first_side: args.first_side,
            seed: args.seed,
            tally,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section(&format!("Simulation: {}", args.game_type.label()));
    print_kv("Games", &tally.total().to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", tally.cross_wins, format_percent(tally.win_rate(Side::Cross))),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", tally.nought_wins, format_percent(tally.win_rate(Side::Nought))),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", tally.draws, format_percent(tally.draw_rate())),
    );
    print_kv("Average length", &format!("{:.2} plays", tally.average_length()));

    Ok(())
}
