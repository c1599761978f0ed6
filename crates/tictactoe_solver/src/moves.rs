//! Move generation and application.

use crate::action::Action;
use crate::error::GameError;
use crate::turn::player;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Returns every legal action on `board`: the empty cells.
///
/// Each cell appears at most once and cells come out in row-major order.
/// A full board yields an empty set.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board after the player to move marks `action`.
///
/// The mark belongs to [`player`] of the *input* board. The input is left
/// untouched; the returned board is an independent copy.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] if `action` is not in
/// [`actions`]`(board)`.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, GameError> {
    if !board.is_empty(action) {
        return Err(GameError::InvalidAction(action));
    }

    let mark = player(board);
    Ok(board.with_cell(action, Cell::Occupied(mark)))
}
