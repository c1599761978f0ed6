//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board: who owns a line, whether the game
//! has ended, and what an ended game is worth.

mod terminal;
mod win;

pub use terminal::{outcome, terminal, utility};
pub use win::{LINES, owns_line, winner};
