//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::Line;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Player whose turn it is at `step`: X on even steps, O on odd ones.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Status of the board currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player owns a complete line.
    #[display("Winner: {winner}")]
    Won {
        /// The winning player.
        winner: Player,
        /// The line that decided the game.
        line: Line,
    },
    /// Board is full with no winner.
    #[display("Draw")]
    Draw,
    /// Game is ongoing.
    #[display("Next Player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
}

impl GameStatus {
    /// True for a win or a draw.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Player::to_move_at(0), Player::X);
        assert_eq!(Player::to_move_at(1), Player::O);
        assert_eq!(Player::to_move_at(8), Player::X);
    }

    #[test]
    fn test_with_mark_returns_a_copy() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.occupied(), 1);
    }

    #[test]
    fn test_display_shows_keys_and_marks() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
        assert_eq!(
            GameStatus::InProgress { next: Player::O }.to_string(),
            "Next Player: O"
        );
        let won = GameStatus::Won {
            winner: Player::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        };
        assert_eq!(won.to_string(), "Winner: X");
        assert!(won.is_finished());
    }
}
