//! Interactive game between a human and the solver.

use crate::config::PlayConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_solver::{Action, Board, GameError, Outcome, minimax, outcome, player, result};
use tracing::{debug, info, instrument, warn};

/// Runs one game, reading human moves from `input`.
///
/// Returns the outcome, or `None` if the human quit or input ran out.
#[instrument(skip_all, fields(human = %config.human(), hints = config.show_hints()))]
pub fn run<R: BufRead, W: Write>(
    config: &PlayConfig,
    start: Board,
    mut input: R,
    mut output: W,
) -> Result<Option<Outcome>> {
    let human = *config.human();
    let mut board = start;
    info!("Starting interactive game");

    loop {
        writeln!(output, "\n{}\n", board)?;

        if let Some(done) = outcome(&board) {
            writeln!(output, "{}", done)?;
            info!(outcome = %done, "Game finished");
            return Ok(Some(done));
        }

        let mover = player(&board);
        if mover != human {
            let action = minimax(&board).context("Solver failed to pick a move")?;
            writeln!(output, "Solver ({}) plays {} {}", mover, action, action.label())?;
            board = result(&board, action)?;
            continue;
        }

        if *config.show_hints() {
            let hint = minimax(&board)?;
            writeln!(output, "Hint: {} {}", hint, hint.label())?;
        }

        write!(output, "Your move ({}), e.g. `1,2` or `center`; `quit` to stop: ", mover)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read move")? == 0 {
            debug!("Input closed");
            return Ok(None);
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            info!("Player quit");
            return Ok(None);
        }

        let action: Action = match line.parse() {
            Ok(action) => action,
            Err(e) => {
                warn!(input = line, "Unparseable move");
                writeln!(output, "{}", e.message)?;
                continue;
            }
        };

        match result(&board, action) {
            Ok(next) => board = next,
            Err(GameError::InvalidAction(action)) => {
                writeln!(output, "{} is already taken", action)?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_solver::Player;

    fn play(config: &PlayConfig, start: &str, moves: &str) -> (Option<Outcome>, String) {
        let mut out = Vec::new();
        let outcome = run(config, start.parse().unwrap(), moves.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_solver_finishes_won_position() {
        // Human plays O; X (solver) to move and wins at (0, 2).
        let config = PlayConfig::new(Player::O, false);
        let (outcome, text) = play(&config, "XX./.O./..O", "");
        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
        assert!(text.contains("Solver (X) plays (0, 2)"));
    }

    #[test]
    fn test_human_win() {
        let config = PlayConfig::new(Player::X, false);
        let (outcome, _) = play(&config, "XX./.O./..O", "0,2\n");
        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let config = PlayConfig::new(Player::X, false);
        let (outcome, text) = play(&config, "XX./.O./..O", "nowhere\n0,0\ntop-right\n");
        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
        assert!(text.contains("Cannot parse action"));
        assert!(text.contains("(0, 0) is already taken"));
    }

    #[test]
    fn test_quit_and_eof() {
        let config = PlayConfig::default();
        assert_eq!(play(&config, ".........", "quit\n").0, None);
        assert_eq!(play(&config, ".........", "").0, None);
    }

    #[test]
    fn test_hints_shown() {
        let config = PlayConfig::new(Player::X, true);
        let (_, text) = play(&config, "XX./.O./..O", "quit\n");
        assert!(text.contains("Hint: (0, 2) Top-right"));
    }
}
