//! Alternating turn invariant: X and O take turns starting with X.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the move producing entry k was made by X when k is odd
/// and by O when k is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, entry)| {
                entry
                    .last_move()
                    .is_some_and(|mv| mv.player == Player::to_move_at(k - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}
