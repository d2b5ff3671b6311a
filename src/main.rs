//! Timeline Games - Unified CLI
//!
//! Play tic-tac-toe in the terminal or replay a move sequence.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use timeline_games::{
    App, AppConfig, Cli, Command, init_file_logging, init_stderr_logging, run_replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { sort } => {
            let config = match sort {
                Some(sort) => config.with_sort_order(sort),
                None => config,
            };
            init_file_logging(&config)?;
            info!(config = ?config, "Configuration resolved");
            run_tui(App::new(*config.sort_order()))
        }
        Command::Replay {
            moves,
            jump,
            sort,
            format,
        } => {
            init_stderr_logging(&config);
            let order = sort.unwrap_or(*config.sort_order());
            let output = run_replay(&moves, jump, order, format)?;
            print!("{}", output);
            Ok(())
        }
    }
}
