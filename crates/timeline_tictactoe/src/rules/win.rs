//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// The eight winning lines, in the order they are checked.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line whose three squares hold the same mark.
///
/// Lines are checked in [`LINES`] order, so a board with two complete
/// lines reports the earlier one.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|[a, b, c]| {
        let sq = board.get(*a);
        sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, *player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some(LINES[0]));
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both complete; the row is checked first.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = line
                .iter()
                .fold(Board::new(), |board, pos| board.with_mark(*pos, Player::O));
            assert_eq!(winning_line(&board), Some(line));
        }
    }
}
