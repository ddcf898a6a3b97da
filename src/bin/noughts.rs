//! noughts CLI - play, simulate and analyse noughts and crosses
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=noughts=debug`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(
    version,
    about = "Noughts and crosses with an unbeatable minimax automaton",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play batches of automaton games and tally the results
    Simulate(noughts::cli::commands::simulate::SimulateArgs),

    /// Score every legal move on a position and recommend one
    Advise(noughts::cli::commands::advise::AdviseArgs),

    /// Play one automaton game, printing every position
    Show(noughts::cli::commands::show::ShowArgs),

    /// Play interactive games against MENACE or another person
    Play(noughts::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
        Commands::Advise(args) => noughts::cli::commands::advise::execute(args),
        Commands::Show(args) => noughts::cli::commands::show::execute(args),
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
    }
}
