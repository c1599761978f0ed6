//! End-of-game detection and scoring.

use super::win::winner;
use crate::error::GameError;
use crate::moves::actions;
use crate::outcome::{Outcome, Utility};
use crate::types::Board;
use tracing::instrument;

/// Returns true if someone has won or no empty cell remains.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || actions(board).is_empty()
}

/// Returns how the game ended, or `None` while it is still in progress.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if actions(board).is_empty() => Some(Outcome::Draw),
        None => None,
    }
}

/// Scores a finished game: 1 if X won, -1 if O won, 0 for a draw.
///
/// # Errors
///
/// Returns [`GameError::NotTerminal`] if the game has not ended.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Result<Utility, GameError> {
    outcome(board)
        .map(Outcome::utility)
        .ok_or(GameError::NotTerminal)
}
