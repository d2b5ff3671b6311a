//! Moves and the outcome of attempting one.

use super::{Coordinates, Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row and column of the marked square.
    pub fn coordinates(&self) -> Coordinates {
        self.position.coordinates()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} played at {}", self.player, self.coordinates())
    }
}

/// Why a click on the board did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredReason {
    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),
    /// The board on display already has a winner.
    #[display("Game is already decided")]
    GameDecided,
}

/// Result of [`GameState::play_at`](crate::GameState::play_at).
///
/// An ignored attempt leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The mark was placed and a history entry appended.
    Placed(Move),
    /// Nothing changed.
    Ignored(IgnoredReason),
}

impl PlayOutcome {
    /// True if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}
