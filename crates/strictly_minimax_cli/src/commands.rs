//! Command implementations. Output goes to the supplied writer.

use crate::config::SelfPlayConfig;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_minimax::{Board, Game, Minimax, best_action, outcome, winning_line};
use tracing::{info, instrument};

/// Plays the configured opening, then lets the engine finish the game.
#[instrument(skip(config, out), fields(opening_len = config.opening().len()))]
pub fn selfplay(config: &SelfPlayConfig, json: bool, out: &mut impl Write) -> Result<Game> {
    let mut game = Game::replay(config.opening()).context("Opening is not a legal sequence")?;
    let show_boards = *config.show_boards() && !json;

    if show_boards {
        writeln!(out, "{}\n", game.board().render())?;
    }

    loop {
        let Some(mover) = game.to_move() else {
            break;
        };
        let Some(action) = game.play_best()? else {
            break;
        };
        if show_boards {
            writeln!(out, "{mover} plays {action}")?;
            writeln!(out, "{}\n", game.board().render())?;
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &game)?;
        writeln!(out)?;
    } else {
        write_result(game.board(), out)?;
    }

    info!(moves = game.history().len(), outcome = ?game.outcome(), "Game over");
    Ok(game)
}

/// Prints the engine's recommended action for `board`.
#[instrument(skip(board, out), fields(board = %board))]
pub fn best(board: &Board, out: &mut impl Write) -> Result<()> {
    match best_action(board)? {
        Some(action) => writeln!(out, "{action}")?,
        None => write_result(board, out)?,
    }
    Ok(())
}

/// Prints the value of every legal action and the search statistics.
#[instrument(skip(board, out), fields(board = %board))]
pub fn analyze(board: &Board, out: &mut impl Write) -> Result<()> {
    let report = Minimax::new().analyze(board)?;

    writeln!(out, "{}\n", board.render())?;
    let Some(best) = report.best else {
        return write_result(board, out);
    };

    for (action, value) in &report.action_values {
        let marker = if *action == best { "  <- best" } else { "" };
        writeln!(out, "{action}  {value:+}{marker}")?;
    }
    writeln!(out, "Value: {:+}", report.value)?;
    writeln!(out, "Nodes: {}", report.nodes)?;
    Ok(())
}

fn write_result(board: &Board, out: &mut impl Write) -> Result<()> {
    match (outcome(board), winning_line(board)) {
        (Some(result), Some((line, _))) => writeln!(out, "Result: {result} ({line})")?,
        (Some(result), None) => writeln!(out, "Result: {result}")?,
        (None, _) => writeln!(out, "Game in progress")?,
    }
    Ok(())
}
