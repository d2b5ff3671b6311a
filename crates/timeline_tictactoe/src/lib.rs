//! Pure tic-tac-toe game logic with a branching move history.
//!
//! # Architecture
//!
//! - **Rules**: winner detection over the eight fixed lines, draw detection
//!   and index-to-coordinate mapping
//! - **GameState**: the full history of board snapshots plus the step
//!   currently on display
//! - **Move list**: sortable, human-readable view of the history
//! - **Invariants**: properties every reachable `GameState` satisfies
//!
//! # Example
//!
//! ```
//! use timeline_tictactoe::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! game.play_at(Position::Center);
//! game.play_at(Position::TopLeft);
//! assert_eq!(game.next_player(), Player::X);
//!
//! // Travel back and branch: the O move is discarded.
//! game.jump_to(1).unwrap();
//! game.play_at(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod types;

pub use action::{IgnoredReason, Move, PlayOutcome};
pub use error::GameError;
pub use game::GameState;
pub use history::{History, HistoryEntry};
pub use move_list::{MoveListItem, SortOrder, move_list};
pub use position::{Coordinates, Position};
pub use rules::Line;
pub use types::{Board, GameStatus, Player, Square};
