//! Game state errors.

use crate::{IgnoredReason, Position};
use derive_more::{Display, Error};

/// Errors from operations that take caller-supplied steps or move lists.
///
/// Clicking an occupied square is not an error; see
/// [`PlayOutcome`](crate::PlayOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// `jump_to` was given a step past the end of the history.
    #[display("Step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of history entries.
        len: usize,
    },
    /// A replayed move was rejected.
    #[display("Move {index} at {position} rejected: {reason}")]
    IllegalMove {
        /// Zero-based index of the move in the replayed sequence.
        index: usize,
        /// Where the move was attempted.
        position: Position,
        /// Why it was rejected.
        reason: IgnoredReason,
    },
}
