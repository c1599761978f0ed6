//! Error types for the solver.

use crate::action::Action;
use derive_more::{Display, Error};
use tracing::instrument;

/// Contract violation by a caller of the game operations.
///
/// None of these are recovered internally; they surface to the caller as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The action is not in the board's legal action set.
    #[display("Invalid action {}: target cell is not empty", _0)]
    InvalidAction(#[error(not(source))] Action),

    /// Utility was requested for a game that has not ended.
    #[display("Utility is only defined for terminal boards")]
    NotTerminal,

    /// A move was requested for a game that has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// Text that could not be parsed into a board, action or player.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(level = "trace", skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
