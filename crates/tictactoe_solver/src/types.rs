//! Core domain types for tic-tac-toe.

use crate::action::Action;
use crate::error::ParseError;
use crate::invariants::{BoardInvariants, InvariantSet, InvariantViolation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(ParseError::new(format!("Unknown player: {:?}", other))),
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a fresh copy via
/// [`crate::result`], so sibling branches of a search never share cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates the initial state: every cell empty.
    #[instrument(level = "trace")]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell targeted by an action.
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row()][action.col()]
    }

    /// Checks if the cell targeted by an action is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|cell| *cell == Cell::Occupied(player))
            .count()
    }

    /// Returns a copy of this board with one cell replaced.
    pub(crate) fn with_cell(mut self, action: Action, cell: Cell) -> Self {
        self.cells[action.row()][action.col()] = cell;
        self
    }

    /// Checks the properties every board reached by legal play satisfies.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self)
    }

    /// Formats the board as a 9-character row-major string (`X`, `O`, `.`).
    pub fn to_compact(&self) -> String {
        self.iter().map(Cell::symbol).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders rows as `X|O|.` separated by `-+-+-`.
///
/// This is for people, not for [`FromStr`]: `+` is rejected by the parser.
/// Use [`Board::to_compact`] for text that parses back.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses nine cell characters in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_`, `-` and spaces are empty.
    /// `/`, `|`, `,` and newlines separate rows and are ignored.
    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(SIZE * SIZE);
        for ch in s.chars() {
            let cell = match ch {
                'x' | 'X' => Cell::Occupied(Player::X),
                'o' | 'O' => Cell::Occupied(Player::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                '/' | '|' | ',' | '\n' | '\r' => continue,
                other => {
                    return Err(ParseError::new(format!(
                        "Unexpected character {:?} in board",
                        other
                    )));
                }
            };
            parsed.push(cell);
        }

        if parsed.len() != SIZE * SIZE {
            return Err(ParseError::new(format!(
                "Board needs {} cells, found {}",
                SIZE * SIZE,
                parsed.len()
            )));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, cell) in parsed.into_iter().enumerate() {
            cells[i / SIZE][i % SIZE] = cell;
        }
        Ok(Self { cells })
    }
}
