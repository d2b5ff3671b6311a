//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn board_from(marks: [Player; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, player))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = board_from([X, O, X, O, X, X, O, X, O]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / O X O
        let board = board_from([X, X, X, O, O, X, O, X, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
