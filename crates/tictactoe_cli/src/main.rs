//! Tic-tac-toe solver CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tictactoe_cli::{Cli, Command, PlayConfig, analyze, best_move, run_play, run_self_play};
use tictactoe_solver::initial_state;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Analyze { board, json } => {
            analyze(&board.unwrap_or_else(initial_state), json, &mut out)
        }
        Command::BestMove { board } => best_move(&board.unwrap_or_else(initial_state), &mut out),
        Command::SelfPlay { board } => run_self_play(&board.unwrap_or_else(initial_state), &mut out),
        Command::Play { config, human } => run_interactive(config, human, &mut out),
    }?;

    out.flush()?;
    Ok(())
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(out))]
fn run_interactive(
    config: Option<std::path::PathBuf>,
    human: Option<tictactoe_solver::Player>,
    out: &mut impl Write,
) -> Result<()> {
    let mut settings = PlayConfig::load(config.as_deref())?;
    if let Some(human) = human {
        settings = settings.with_human(human);
    }

    let stdin = std::io::stdin();
    match run_play(&settings, initial_state(), stdin.lock(), out)? {
        Some(outcome) => info!(%outcome, "Game over"),
        None => info!("Game abandoned"),
    }
    Ok(())
}
