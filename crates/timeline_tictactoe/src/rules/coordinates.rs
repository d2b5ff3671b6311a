//! Square index to row/column mapping.

use crate::{Coordinates, Position};

/// Row and column of the square at `index`: `(index / 3, index % 3)`.
///
/// Returns `None` for indices past the last square.
pub fn coordinates_of(index: usize) -> Option<Coordinates> {
    Position::from_index(index).map(Position::coordinates)
}
