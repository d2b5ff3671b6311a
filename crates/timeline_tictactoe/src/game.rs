//! Game state with time travel over the move history.
//!
//! A [`GameState`] keeps every board snapshot since the start of the game
//! plus the step currently on display. Jumping back only moves the cursor;
//! the abandoned future is discarded the next time a mark is placed.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::{self, Line};
use crate::{
    Board, GameError, GameStatus, History, HistoryEntry, IgnoredReason, Move, Player, PlayOutcome,
    Position,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Move history plus the step currently on display.
///
/// The player to move is derived from the step: X on even steps,
/// O on odd ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    step: usize,
}

impl GameState {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
        }
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] for the first move that would be
    /// ignored by [`play_at`](Self::play_at).
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(positions: &[Position]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for (index, position) in positions.iter().copied().enumerate() {
            if let PlayOutcome::Ignored(reason) = game.play_at(position) {
                return Err(GameError::IllegalMove {
                    index,
                    position,
                    reason,
                });
            }
        }
        Ok(game)
    }

    /// Entire recorded history, including steps after the one on display.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently on display.
    pub fn step(&self) -> usize {
        self.step
    }

    /// History entry currently on display.
    pub fn current(&self) -> &HistoryEntry {
        // `step` is always a valid index; see `HistoryConsistentInvariant`.
        &self.history.entries()[self.step]
    }

    /// Board currently on display.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player who moves next from the step on display.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step)
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Winning line on the board on display.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.board())
    }

    /// Winner on the board on display.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.board())
    }

    /// Status of the board on display.
    pub fn status(&self) -> GameStatus {
        let board = self.board();
        let won = rules::winning_line(board)
            .and_then(|line| board.get(line[0]).player().map(|winner| (winner, line)));
        match won {
            Some((winner, line)) => GameStatus::Won { winner, line },
            None if rules::is_full(board) => GameStatus::Draw,
            _ => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// True once the board on display is won or full.
    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Places the next player's mark at `position`.
    ///
    /// Ignored when the board on display already has a winner or the
    /// square is taken. Otherwise every entry after the current step is
    /// discarded, the new board is appended and the step advances.
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn play_at(&mut self, position: Position) -> PlayOutcome {
        let board = self.board();

        if self.winning_line().is_some() {
            debug!("Game already decided, ignoring move");
            return PlayOutcome::Ignored(IgnoredReason::GameDecided);
        }

        if !board.is_empty(position) {
            debug!("Square occupied, ignoring move");
            return PlayOutcome::Ignored(IgnoredReason::SquareOccupied(position));
        }

        let mv = Move::new(self.next_player(), position);
        let entry = HistoryEntry::after(board.with_mark(position, mv.player), mv);
        self.history.branch_from(self.step, entry);
        self.step += 1;
        debug!(new_step = self.step, history_len = self.history.len(), "Move placed");

        self.debug_check_invariants();
        PlayOutcome::Placed(mv)
    }

    /// Displays the board as it stood at `step`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StepOutOfRange`] if `step` is not a recorded
    /// history entry; the state is left unchanged.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.step = step;
        debug!(next = %self.next_player(), "Jumped");
        self.debug_check_invariants();
        Ok(())
    }

    /// Clears the history back to the empty board with X to move.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "game state invariants violated: {:?}",
            TimelineInvariants::check_all(self)
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
