//! Monotonic board invariant: marks are only ever added.

use super::Invariant;
use crate::GameState;

/// Invariant: each board is its predecessor plus exactly the recorded move,
/// placed on a square that was empty before.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().entries().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            next.last_move().is_some_and(|mv| {
                prev.board().is_empty(mv.position)
                    && prev.board().with_mark(mv.position, mv.player) == *next.board()
            })
        })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark to the previous board"
    }
}
