//! Turn inference.
//!
//! Whose move it is follows from the marks on the board alone; no turn
//! counter is stored anywhere.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the player who moves next on `board`.
///
/// X moves whenever the mark counts are equal (including the empty board),
/// O otherwise. Terminal boards still get an answer; it just has no use.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(player(&Board::new()), Player::X);
    }

    #[test]
    fn test_o_moves_after_x() {
        let board: Board = "....X....".parse().unwrap();
        assert_eq!(player(&board), Player::O);
    }

    #[test]
    fn test_x_moves_after_o() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(player(&board), Player::X);
    }

    #[test]
    fn test_full_board_still_answers() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(player(&board), Player::O);
    }
}
