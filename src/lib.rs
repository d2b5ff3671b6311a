//! Timeline Games library - tic-tac-toe with time travel.
//!
//! The game rules and history live in [`timeline_tictactoe`]; this crate
//! is the layer a player touches.
//!
//! # Architecture
//!
//! - **TUI**: interactive board and move list (ratatui + crossterm)
//! - **Replay**: headless rendering of a move sequence as text or JSON
//! - **Config**: TOML preferences such as the move list order
//! - **CLI**: clap front end tying the pieces together
//!
//! # Example
//!
//! ```
//! use timeline_games::{OutputFormat, run_replay};
//! use timeline_tictactoe::SortOrder;
//!
//! let moves = ["0", "1", "4", "2", "8"].map(String::from);
//! let text = run_replay(&moves, None, SortOrder::Ascending, OutputFormat::Text)?;
//! assert!(text.contains("Winner: X"));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, OutputFormat};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Replay
pub use replay::{ReplayReport, parse_moves, render_transcript, run_replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};
