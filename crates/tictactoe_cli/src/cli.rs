//! Command-line interface for the tic-tac-toe solver.

use clap::{Parser, Subcommand};
use tictactoe_solver::{Board, Player};

/// Tic-tac-toe solver - optimal play by exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Optimal tic-tac-toe play by exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
///
/// Boards are nine cells in row-major order, e.g. `XX./.O./...`
/// (`X`, `O`, `.` for empty; `/` separators optional).
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show turn, legal moves, outcome and best move for a board
    Analyze {
        /// Board to analyze (defaults to the empty board)
        #[arg(short, long)]
        board: Option<Board>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the optimal move as `row col`
    BestMove {
        /// Board to search (defaults to the empty board)
        #[arg(short, long)]
        board: Option<Board>,
    },

    /// Let both sides play optimally until the game ends
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(short, long)]
        board: Option<Board>,
    },

    /// Play against the solver on stdin/stdout
    Play {
        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Mark the human plays (overrides the config file)
        #[arg(long)]
        human: Option<Player>,
    },
}
