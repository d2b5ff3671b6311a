//! Tests for game state, time travel and status reporting.

use timeline_tictactoe::{
    GameState, GameStatus, IgnoredReason, Move, Player, PlayOutcome, Position, SortOrder,
    move_list, rules,
};

fn at(index: usize) -> Position {
    Position::from_index(index).expect("index in range")
}

#[test]
fn test_diagonal_win_example() {
    let mut game = GameState::new();
    for index in [0, 1, 4, 2, 8] {
        assert!(game.play_at(at(index)).is_placed());
    }

    let line = game.winning_line().expect("X owns the diagonal");
    assert_eq!(line.map(Position::to_index), [0, 4, 8]);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8].map(at)).expect("valid replay");

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw");
    assert!(rules::is_draw(game.board()));
    assert!(game.is_finished());
}

#[test]
fn test_draw_rejects_further_moves() {
    let mut game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8].map(at)).unwrap();
    let before = game.clone();

    // Every square is occupied, so any click is ignored.
    for pos in Position::ALL {
        assert_eq!(
            game.play_at(pos),
            PlayOutcome::Ignored(IgnoredReason::SquareOccupied(pos))
        );
    }
    assert_eq!(game, before);
}

#[test]
fn test_status_text_tracks_turn() {
    let mut game = GameState::new();
    assert_eq!(game.status().to_string(), "Next Player: X");
    game.play_at(Position::Center);
    assert_eq!(game.status().to_string(), "Next Player: O");
}

#[test]
fn test_time_travel_round_trip() {
    let mut game = GameState::replay(&[4, 0, 8, 2].map(at)).unwrap();
    let latest = *game.board();

    game.jump_to(0).unwrap();
    assert_eq!(game.board().occupied(), 0);
    assert!(game.x_is_next());

    game.jump_to(3).unwrap();
    assert!(!game.x_is_next());

    game.jump_to(4).unwrap();
    assert_eq!(*game.board(), latest);
}

#[test]
fn test_branch_discards_future_and_move_list() {
    let mut game = GameState::replay(&[4, 0, 8, 2].map(at)).unwrap();
    game.jump_to(2).unwrap();
    game.play_at(Position::BottomLeft);

    assert_eq!(game.history().len(), 4);
    assert_eq!(
        game.current().last_move(),
        Some(Move::new(Player::X, Position::BottomLeft))
    );

    let items = move_list(&game, SortOrder::Descending);
    let text: Vec<String> = items.iter().map(ToString::to_string).collect();
    assert_eq!(
        text,
        vec![
            "X played at (2,0)",
            "O played at (0,0)",
            "X played at (1,1)",
        ]
    );
    assert!(items[0].active);
}

#[test]
fn test_game_state_serializes() {
    let game = GameState::replay(&[Position::Center]).unwrap();
    let json = serde_json::to_value(&game).unwrap();

    assert_eq!(json["step"], 1);
    assert_eq!(json["history"]["entries"].as_array().unwrap().len(), 2);
    assert_eq!(json["history"]["entries"][1]["last_move"]["position"], "Center");
}
