//! Command-line interface for timeline_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use timeline_tictactoe::SortOrder;

/// Timeline Games - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "timeline_games")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Initial move list order (ascending or descending)
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Replay a move sequence and print the resulting game
    Replay {
        /// Comma-separated positions, as 0-8 indices or labels like `center`
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Step to display after replaying (defaults to the last move)
        #[arg(long)]
        jump: Option<usize>,

        /// Move list order (ascending or descending)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The full game state as JSON
    Json,
}
