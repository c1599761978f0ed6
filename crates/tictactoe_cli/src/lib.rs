//! Command-line front end for the tic-tac-toe solver.
//!
//! # Architecture
//!
//! - **Cli**: argument parsing with clap
//! - **Config**: TOML settings for interactive play
//! - **Commands**: one-shot analyze / best-move / self-play
//! - **Play**: interactive game loop over any reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod play;

pub use cli::{Cli, Command};
pub use commands::{Analysis, analyze, best_move, ensure_valid, run_self_play};
pub use config::{ConfigError, PlayConfig};
pub use play::run as run_play;
