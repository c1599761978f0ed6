//! Mark balance invariant: X moves first and players alternate.

use super::Invariant;
use crate::types::{Board, Player};
use tracing::warn;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(MarkBalanceInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_x_one_ahead_holds() {
        let board: Board = "X........".parse().unwrap();
        assert!(MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_o_ahead_violates() {
        let board: Board = "O........".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board: Board = "XX.......".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
