//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Every reachable board below the
//! root is visited: there is no pruning, no move ordering and no cache.
//! Boards are passed by value into each branch, so siblings never observe
//! each other's moves.

use crate::action::Action;
use crate::error::GameError;
use crate::moves::{actions, result};
use crate::outcome::Utility;
use crate::rules::outcome;
use crate::turn::player;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Returns the optimal action for the player to move.
///
/// Ties go to the first action in [`actions`] order that reaches the best
/// value; later actions only replace it when strictly better.
///
/// # Errors
///
/// Returns [`GameError::GameOver`] if `board` is terminal.
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn minimax(board: &Board) -> Result<Action, GameError> {
    if outcome(board).is_some() {
        return Err(GameError::GameOver);
    }

    let current = player(board);
    let mut best: Option<(Action, Utility)> = None;

    for action in actions(board) {
        let child = result(board, action)?;
        let value = match current {
            Player::X => min_value(&child)?,
            Player::O => max_value(&child)?,
        };

        let improves = match best {
            None => true,
            Some((_, best_value)) => match current {
                Player::X => value > best_value,
                Player::O => value < best_value,
            },
        };
        if improves {
            best = Some((action, value));
        }
    }

    let (action, value) = best.ok_or(GameError::GameOver)?;
    debug!(player = %current, action = %action, value, "Selected optimal action");
    Ok(action)
}

/// Best utility X can force from `board`, assuming X is to move.
///
/// # Errors
///
/// Only propagates [`GameError`] from [`result`], which legal enumeration
/// never triggers.
#[instrument(level = "trace", skip(board))]
pub fn max_value(board: &Board) -> Result<Utility, GameError> {
    if let Some(done) = outcome(board) {
        return Ok(done.utility());
    }

    let mut value = Utility::MIN;
    for action in actions(board) {
        value = value.max(min_value(&result(board, action)?)?);
    }
    Ok(value)
}

/// Best utility O can force from `board`, assuming O is to move.
///
/// # Errors
///
/// Only propagates [`GameError`] from [`result`], which legal enumeration
/// never triggers.
#[instrument(level = "trace", skip(board))]
pub fn min_value(board: &Board) -> Result<Utility, GameError> {
    if let Some(done) = outcome(board) {
        return Ok(done.utility());
    }

    let mut value = Utility::MAX;
    for action in actions(board) {
        value = value.min(max_value(&result(board, action)?)?);
    }
    Ok(value)
}

/// Game-theoretic value of `board` under optimal play by both sides.
///
/// Terminal boards score their utility; otherwise the player to move picks.
///
/// # Errors
///
/// Only propagates [`GameError`] from [`result`].
#[instrument(skip(board), fields(board = %board.to_compact()))]
pub fn value(board: &Board) -> Result<Utility, GameError> {
    match player(board) {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}
