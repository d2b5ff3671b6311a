//! History consistency invariant: every step is one move further along.

use super::Invariant;
use crate::GameState;

/// Invariant: the step is a valid index and entry k holds exactly k marks.
///
/// Entry 0 is the empty board with no move; every later entry records
/// the move that produced it.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Checks the history entries alone, independent of the current step.
    pub fn entries_hold(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .iter()
            .enumerate()
            .all(|(k, entry)| {
                entry.board().occupied() == k && entry.last_move().is_some() == (k > 0)
            })
    }
}

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.step() < state.history().len() && Self::entries_hold(state)
    }

    fn description() -> &'static str {
        "Step is in range and entry k holds exactly k marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[TopLeft, Center, TopRight, BottomLeft]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_holds_after_jump() {
        let mut game = GameState::replay(&[TopLeft, Center]).unwrap();
        game.jump_to(0).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }
}
