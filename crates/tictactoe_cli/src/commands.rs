//! One-shot commands: analyze, best-move, self-play.

use anyhow::{Context, Result, bail};
use derive_getters::Getters;
use serde::Serialize;
use std::io::Write;
use tictactoe_solver::{
    Action, Board, Player, Utility, actions, minimax, player, result, self_play, terminal, utility,
    value, winner,
};
use tracing::{debug, instrument};

/// Everything the solver can say about one board.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct Analysis {
    /// Board in compact form.
    board: String,
    /// Player whose turn it is.
    to_move: Player,
    /// Legal actions in row-major order.
    actions: Vec<Action>,
    /// Winner, if any.
    winner: Option<Player>,
    /// Whether the game has ended.
    terminal: bool,
    /// Utility of the finished game.
    utility: Option<Utility>,
    /// Value under optimal play by both sides.
    value: Utility,
    /// Optimal action for the player to move.
    best_move: Option<Action>,
}

impl Analysis {
    /// Runs every operation of the solver against `board`.
    #[instrument(skip(board), fields(board = %board.to_compact()))]
    pub fn of(board: &Board) -> Result<Self> {
        // The value of a live board is the value of its optimal child.
        let (utility, value, best_move) = if terminal(board) {
            let u = utility(board)?;
            (Some(u), u, None)
        } else {
            let best = minimax(board)?;
            (None, value(&result(board, best)?)?, Some(best))
        };
        let analysis = Self {
            board: board.to_compact(),
            to_move: player(board),
            actions: actions(board),
            winner: winner(board),
            terminal: utility.is_some(),
            utility,
            value,
            best_move,
        };
        debug!(?analysis, "Analysis complete");
        Ok(analysis)
    }
}

/// Rejects boards that legal play from the empty board cannot produce.
pub fn ensure_valid(board: &Board) -> Result<()> {
    if let Err(violations) = board.validate() {
        let reasons = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Board {} is not reachable by legal play: {}", board.to_compact(), reasons);
    }
    Ok(())
}

/// Prints an analysis of `board`, as text or JSON.
#[instrument(skip(board, out))]
pub fn analyze(board: &Board, json: bool, out: &mut impl Write) -> Result<()> {
    ensure_valid(board)?;
    let analysis = Analysis::of(board)?;

    if json {
        let text = serde_json::to_string_pretty(&analysis).context("Failed to encode analysis")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    writeln!(out, "{}\n", board)?;
    writeln!(out, "To move:  {}", analysis.to_move)?;
    let moves: Vec<String> = analysis.actions.iter().map(|a| a.to_string()).collect();
    writeln!(out, "Actions:  {}", moves.join(" "))?;
    match analysis.winner {
        Some(w) => writeln!(out, "Winner:   {}", w)?,
        None => writeln!(out, "Winner:   none")?,
    }
    writeln!(out, "Terminal: {}", analysis.terminal)?;
    if let Some(u) = analysis.utility {
        writeln!(out, "Utility:  {}", u)?;
    }
    writeln!(out, "Value:    {}", analysis.value)?;
    if let Some(best) = analysis.best_move {
        writeln!(out, "Best:     {} {}", best, best.label())?;
    }
    Ok(())
}

/// Prints the optimal move as `row col`.
#[instrument(skip(board, out))]
pub fn best_move(board: &Board, out: &mut impl Write) -> Result<()> {
    ensure_valid(board)?;
    let action = minimax(board).context("No move to search for")?;
    writeln!(out, "{} {}", action.row(), action.col())?;
    Ok(())
}

/// Plays the game out optimally and prints every position.
#[instrument(skip(board, out))]
pub fn run_self_play(board: &Board, out: &mut impl Write) -> Result<()> {
    ensure_valid(board)?;
    let log = self_play(board)?;
    let positions = log.positions()?;

    writeln!(out, "{}\n", log.start())?;
    for (pair, action) in positions.windows(2).zip(log.moves()) {
        writeln!(out, "{} plays {}", player(&pair[0]), action)?;
        writeln!(out, "{}\n", pair[1])?;
    }
    writeln!(out, "{}", log.outcome())?;
    Ok(())
}
