//! Win detection.

use crate::action::Action;
use crate::types::{Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

const fn cell(row: usize, col: usize) -> Action {
    Action::ALL[row * 3 + col]
}

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [cell(0, 0), cell(0, 1), cell(0, 2)],
    [cell(1, 0), cell(1, 1), cell(1, 2)],
    [cell(2, 0), cell(2, 1), cell(2, 2)],
    // Columns
    [cell(0, 0), cell(1, 0), cell(2, 0)],
    [cell(0, 1), cell(1, 1), cell(2, 1)],
    [cell(0, 2), cell(1, 2), cell(2, 2)],
    // Diagonals
    [cell(0, 0), cell(1, 1), cell(2, 2)],
    [cell(0, 2), cell(1, 1), cell(2, 0)],
];

/// Checks whether `player` holds all three cells of any line.
pub fn owns_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|a| board.get(*a) == Cell::Occupied(player)))
}

/// Returns the player with three in a row, or `None`.
///
/// X is checked before O. Boards reached by legal play never have both.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| owns_line(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X/XO./X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../...".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_x_reported_first_on_unreachable_board() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }
}
