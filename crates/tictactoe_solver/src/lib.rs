//! Exact optimal play for 3x3 tic-tac-toe.
//!
//! Given a board, this crate answers whose turn it is, which moves are
//! legal, what a move produces, whether the game is over and what it is
//! worth, and, through exhaustive minimax, which move guarantees the best
//! outcome for the player to move.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Cell`], [`Player`], [`Action`]
//! - **Turn inference**: [`player`] derives the mover from mark counts
//! - **Moves**: [`actions`] and [`result`] (copy-on-write, never mutates)
//! - **Rules**: [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] over the full game tree, no pruning
//!
//! # Example
//!
//! ```
//! use tictactoe_solver::{Action, Board, minimax};
//!
//! let board: Board = "XX./.O./..O".parse().unwrap();
//! assert_eq!(minimax(&board).unwrap(), Action::new(0, 2).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod invariants;
mod moves;
mod outcome;
mod rules;
mod search;
mod turn;
mod types;

pub use action::Action;
pub use error::{GameError, ParseError};
pub use game::{PlayLog, replay, self_play};
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    SingleWinnerInvariant,
};
pub use moves::{actions, result};
pub use outcome::{Outcome, Utility};
pub use rules::{LINES, outcome, owns_line, terminal, utility, winner};
pub use search::{max_value, min_value, minimax, value};
pub use turn::player;
pub use types::{Board, Cell, Player, SIZE};

/// Creates the starting position: an empty 3x3 board.
pub fn initial_state() -> Board {
    Board::new()
}
