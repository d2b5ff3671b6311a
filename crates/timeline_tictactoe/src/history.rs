//! Board snapshots recorded after every move.

use crate::{Board, Coordinates, Move};
use serde::{Deserialize, Serialize};

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot of `board` as it stands after `mv`.
    pub fn after(board: Board, mv: Move) -> Self {
        Self {
            board,
            last_move: Some(mv),
        }
    }

    /// Board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this board; `None` for the initial entry.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Row and column of the move that produced this board.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.last_move.map(|mv| mv.coordinates())
    }
}

/// Ordered board snapshots; entry 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// History holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`, then appends `entry`.
    ///
    /// Entry 0 always survives the truncation.
    pub(crate) fn branch_from(&mut self, step: usize, entry: HistoryEntry) {
        self.entries.truncate(step + 1);
        self.entries.push(entry);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn entry(board: &Board, player: Player, position: Position) -> HistoryEntry {
        HistoryEntry::after(board.with_mark(position, player), Move::new(player, position))
    }

    #[test]
    fn test_new_history_has_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.get(0), Some(&HistoryEntry::initial()));
        assert_eq!(history.entries()[0].coordinates(), None);
    }

    #[test]
    fn test_branch_from_latest_appends() {
        let mut history = History::new();
        let first = entry(&Board::new(), Player::X, Position::Center);
        history.branch_from(0, first.clone());
        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&first));
        assert_eq!(first.coordinates(), Some(Coordinates::new(1, 1)));
    }

    #[test]
    fn test_branch_from_earlier_step_discards_future() {
        let mut history = History::new();
        let first = entry(&Board::new(), Player::X, Position::Center);
        let second = entry(first.board(), Player::O, Position::TopLeft);
        history.branch_from(0, first.clone());
        history.branch_from(1, second);

        let replacement = entry(&Board::new(), Player::X, Position::BottomRight);
        history.branch_from(0, replacement.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(&replacement));
        assert_eq!(history.get(2), None);
    }
}
