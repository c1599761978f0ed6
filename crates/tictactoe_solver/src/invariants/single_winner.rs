//! Single winner invariant: at most one player owns a line.

use super::Invariant;
use crate::rules::owns_line;
use crate::types::{Board, Player};
use tracing::warn;

/// Invariant: X and O never both hold a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let valid = !(owns_line(board, Player::X) && owns_line(board, Player::O));
        if !valid {
            warn!(board = %board.to_compact(), "Both players own a line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_winner_holds() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(SingleWinnerInvariant::holds(&board));
    }

    #[test]
    fn test_double_winner_violates() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert!(!SingleWinnerInvariant::holds(&board));
    }
}
