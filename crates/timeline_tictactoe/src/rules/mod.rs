//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! game state, the invariants and the UI can all share them.

pub mod coordinates;
pub mod draw;
pub mod win;

pub use coordinates::coordinates_of;
pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, winning_line};
