//! Human-readable, sortable view of the move history.

use crate::{Coordinates, GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// The other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown on the sort button.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▼",
            Self::Descending => "▲",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[display("{player} played at {coordinates}")]
pub struct MoveListItem {
    /// History step this move produced.
    pub step: usize,
    /// Who moved.
    pub player: Player,
    /// Where they moved.
    pub coordinates: Coordinates,
    /// True when this step is on display.
    pub active: bool,
}

/// Every recorded move (the initial board excluded) in the given order.
///
/// Moves after the step on display are included so the player can travel
/// forward again until a new move discards them.
#[instrument(skip(state), fields(step = state.step()))]
pub fn move_list(state: &GameState, order: SortOrder) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = state
        .history()
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(step, entry)| {
            entry.last_move().map(|mv| MoveListItem {
                step,
                player: mv.player,
                coordinates: mv.coordinates(),
                active: step == state.step(),
            })
        })
        .collect();

    if order == SortOrder::Descending {
        items.reverse();
    }
    items
}
