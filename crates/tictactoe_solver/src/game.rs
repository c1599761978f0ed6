//! Driving whole games on top of the core operations.

use crate::action::Action;
use crate::error::GameError;
use crate::moves::result;
use crate::outcome::Outcome;
use crate::rules::outcome;
use crate::search::minimax;
use crate::types::Board;
use tracing::{info, instrument};

/// Record of a game played out by [`self_play`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlayLog {
    start: Board,
    moves: Vec<Action>,
    final_board: Board,
    outcome: Outcome,
}

impl PlayLog {
    /// Board the game started from.
    pub fn start(&self) -> &Board {
        &self.start
    }

    /// Actions taken, in order.
    pub fn moves(&self) -> &[Action] {
        &self.moves
    }

    /// Terminal board the game ended on.
    pub fn final_board(&self) -> &Board {
        &self.final_board
    }

    /// How the game ended.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Every board from start to finish, inclusive.
    ///
    /// # Errors
    ///
    /// Cannot fail for logs produced by [`self_play`].
    pub fn positions(&self) -> Result<Vec<Board>, GameError> {
        let mut boards = vec![self.start];
        let mut board = self.start;
        for action in &self.moves {
            board = result(&board, *action)?;
            boards.push(board);
        }
        Ok(boards)
    }
}

/// Applies `moves` in order starting from the empty board.
///
/// # Errors
///
/// Returns [`GameError::InvalidAction`] for the first move whose cell is
/// already taken.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[Action]) -> Result<Board, GameError> {
    moves
        .iter()
        .try_fold(Board::new(), |board, action| result(&board, *action))
}

/// Plays both sides with [`minimax`] from `start` until the game ends.
///
/// A board that is already terminal yields an empty move list.
///
/// # Errors
///
/// Only propagates errors from the core operations, which legal play never
/// triggers.
#[instrument(skip(start), fields(start = %start.to_compact()))]
pub fn self_play(start: &Board) -> Result<PlayLog, GameError> {
    let mut board = *start;
    let mut moves = Vec::new();

    let finished = loop {
        if let Some(done) = outcome(&board) {
            break done;
        }
        let action = minimax(&board)?;
        board = result(&board, action)?;
        moves.push(action);
    };

    info!(moves = moves.len(), outcome = %finished, "Self-play finished");
    Ok(PlayLog {
        start: *start,
        moves,
        final_board: board,
        outcome: finished,
    })
}
