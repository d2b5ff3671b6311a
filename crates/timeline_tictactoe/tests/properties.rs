//! Property-based tests for the rules and the branching history.

use proptest::prelude::*;
use timeline_tictactoe::invariants::{InvariantSet, TimelineInvariants};
use timeline_tictactoe::rules::{LINES, coordinates_of, winning_line};
use timeline_tictactoe::{Board, GameState, PlayOutcome, Player, Position, Square};

// =============================================================================
// Strategies
// =============================================================================

fn arb_square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

/// Any assignment of marks, reachable in play or not.
fn arb_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(arb_square()).prop_map(|squares| {
        Position::ALL
            .iter()
            .zip(squares)
            .fold(Board::new(), |mut board, (pos, square)| {
                board.set(*pos, square);
                board
            })
    })
}

fn arb_position() -> impl Strategy<Value = Position> {
    (0usize..9).prop_map(|i| Position::from_index(i).unwrap())
}

fn arb_clicks() -> impl Strategy<Value = Vec<Position>> {
    prop::collection::vec(arb_position(), 0..16)
}

fn play_all(clicks: &[Position]) -> GameState {
    let mut game = GameState::new();
    for pos in clicks {
        game.play_at(*pos);
    }
    game
}

fn owner(board: &Board, line: [Position; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|pos| board.get(pos));
    match a {
        Square::Occupied(player) if a == b && b == c => Some(player),
        _ => None,
    }
}

// =============================================================================
// Rules
// =============================================================================

proptest! {
    #[test]
    fn winning_line_is_first_owned_line(board in arb_board()) {
        let expected = LINES.into_iter().find(|line| owner(&board, *line).is_some());
        prop_assert_eq!(winning_line(&board), expected);
    }

    #[test]
    fn no_winning_line_without_owned_triple(board in arb_board()) {
        if winning_line(&board).is_none() {
            prop_assert!(LINES.iter().all(|line| owner(&board, *line).is_none()));
        }
    }
}

#[test]
fn coordinates_are_row_major() {
    for i in 0..9 {
        let coords = coordinates_of(i).unwrap();
        assert_eq!(coords.row * 3 + coords.column, i);
        assert_eq!(coords.to_position(), Position::from_index(i));
    }
}

// =============================================================================
// Game state
// =============================================================================

proptest! {
    #[test]
    fn invariants_hold_for_any_click_sequence(clicks in arb_clicks()) {
        let game = play_all(&clicks);
        prop_assert!(TimelineInvariants::check_all(&game).is_ok());
        prop_assert_eq!(game.step(), game.history().len() - 1);
    }

    #[test]
    fn ignored_clicks_leave_state_unchanged(clicks in arb_clicks(), extra in arb_position()) {
        let mut game = play_all(&clicks);
        let before = game.clone();
        if let PlayOutcome::Ignored(_) = game.play_at(extra) {
            prop_assert_eq!(game, before);
        } else {
            prop_assert!(before.winning_line().is_none());
            prop_assert!(before.board().is_empty(extra));
        }
    }

    #[test]
    fn playing_after_jump_discards_later_steps(
        clicks in arb_clicks(),
        target in 0usize..16,
        extra in arb_position(),
    ) {
        let mut game = play_all(&clicks);
        let step = target % game.history().len();
        let kept = game.history().entries()[..=step].to_vec();

        game.jump_to(step).unwrap();
        prop_assert_eq!(game.next_player(), Player::to_move_at(step));

        if game.play_at(extra).is_placed() {
            prop_assert_eq!(game.history().len(), step + 2);
            prop_assert_eq!(&game.history().entries()[..=step], &kept[..]);
            prop_assert_eq!(game.step(), step + 1);
        }
    }

    #[test]
    fn jump_out_of_range_is_rejected(clicks in arb_clicks(), past in 0usize..4) {
        let mut game = play_all(&clicks);
        let before = game.clone();
        let step = game.history().len() + past;
        prop_assert!(game.jump_to(step).is_err());
        prop_assert_eq!(game, before);
    }
}
