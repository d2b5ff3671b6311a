//! Headless replay: build a game from a move list and print it.

use crate::OutputFormat;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::fmt::{self, Write};
use timeline_tictactoe::{
    GameState, GameStatus, MoveListItem, Position, SortOrder, move_list,
};
use tracing::{info, instrument};

/// Parses positions given as 0-8 indices or labels.
pub fn parse_moves(moves: &[String]) -> Result<Vec<Position>> {
    moves
        .iter()
        .map(|s| {
            Position::from_label_or_number(s)
                .ok_or_else(|| anyhow!("Invalid position '{}': expected 0-8 or a label", s))
        })
        .collect()
}

/// Everything `replay --format json` prints.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Full game state, history included.
    pub game: &'a GameState,
    /// Status of the step on display.
    pub status: GameStatus,
    /// Move list in the requested order.
    pub moves: Vec<MoveListItem>,
}

/// Replays `moves`, optionally jumps back, and renders the result.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn run_replay(
    moves: &[String],
    jump: Option<usize>,
    order: SortOrder,
    format: OutputFormat,
) -> Result<String> {
    let positions = parse_moves(moves)?;
    let mut game = GameState::replay(&positions).context("Replay failed")?;

    if let Some(step) = jump {
        game.jump_to(step).context("Jump failed")?;
    }
    info!(step = game.step(), status = %game.status(), "Replay complete");

    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            render_transcript(&mut out, &game, order).context("Failed to render transcript")?;
            Ok(out)
        }
        OutputFormat::Json => {
            let report = ReplayReport {
                game: &game,
                status: game.status(),
                moves: move_list(&game, order),
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize game")
        }
    }
}

/// Writes a plain-text view of the game: board, status and move list.
///
/// The step on display is marked with `>`.
pub fn render_transcript<W: Write>(
    out: &mut W,
    game: &GameState,
    order: SortOrder,
) -> fmt::Result {
    let status = game.status();

    writeln!(out, "{}", game.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", status)?;
    if let GameStatus::Won { line, .. } = status {
        let labels: Vec<&str> = line.iter().map(Position::label).collect();
        writeln!(out, "Winning line: {}", labels.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "Moves ({} {})", order, order.indicator())?;

    let start = if game.step() == 0 { ">" } else { " " };
    writeln!(out, "{}  0. Game start", start)?;
    for item in move_list(game, order) {
        let marker = if item.active { ">" } else { " " };
        writeln!(out, "{} {:>2}. {}", marker, item.step, item)?;
    }
    Ok(())
}
