//! Scenario tests for move application, expiry and win detection.

use tictactoe_engine::{
    Board, GameOutcome, GameState, MoveError, Player, Position, Session, Square, Variant,
    check_winner,
};

fn play(variant: Variant, moves: &[usize]) -> GameState {
    moves
        .iter()
        .fold(GameState::new(variant), |game, index| game.apply_move(*index))
}

#[test]
fn test_diagonal_split_between_players_has_no_winner() {
    let game = play(Variant::Standard, &[0, 4, 8]);

    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_detector_finds_constructed_top_row() {
    let mut board = Board::new();
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        board.set(pos, Square::Occupied(Player::X));
    }

    let win = check_winner(&board).expect("top row complete");
    assert_eq!(win.line.indices(), [0, 1, 2]);
    assert_eq!(win.player, Player::X);
}

#[test]
fn test_winner_freezes_turn_and_rejects_moves() {
    // X: 0, 1, 2 along the top; O: 3, 4.
    let game = play(Variant::Standard, &[0, 3, 1, 4, 2]);

    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.status_label(), "winner: X");
    assert_eq!(game.try_apply(8).err(), Some(MoveError::GameOver));

    let after = game.clone().apply_move(8);
    assert_eq!(after, game);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn test_seventh_move_expires_first() {
    // No line is completed along the way.
    let game = play(Variant::Vanishing, &[0, 4, 8, 2, 6, 3]);
    assert_eq!(game.board().occupied_count(), 6);
    assert_eq!(game.next_eviction(), Some(Position::TopLeft));

    let game = game.apply_move(5);

    assert!(game.board().is_empty(Position::TopLeft));
    assert_eq!(game.board().occupied_count(), 6);
    assert_eq!(
        game.history().iter().map(Position::to_index).collect::<Vec<_>>(),
        vec![4, 8, 2, 6, 3, 5]
    );
    assert_eq!(game.moves_played(), 7);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_literal_sequence_expires_then_wins_anti_diagonal() {
    // X holds 0, 2, 4 and O holds 1, 3, 5. Move 7 expires X's mark on 0
    // before X lands on 6, completing 2-4-6.
    let game = play(Variant::Vanishing, &[0, 1, 2, 3, 4, 5, 6]);

    assert!(game.board().is_empty(Position::TopLeft));
    assert_eq!(
        game.history().iter().map(Position::to_index).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
    match game.outcome() {
        GameOutcome::Won(win) => {
            assert_eq!(win.line.indices(), [2, 4, 6]);
            assert_eq!(win.player, Player::X);
        }
        GameOutcome::InProgress => panic!("X should have completed the anti-diagonal"),
    }
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.next_eviction(), None);
}

#[test]
fn test_cell_freed_by_expiry_is_playable_again() {
    let game = play(Variant::Vanishing, &[0, 4, 8, 2, 6, 3, 5]);
    assert!(game.is_legal(Position::TopLeft));

    // O retakes the cell X lost; O's own mark on 4 expires.
    let game = game.apply_move(0);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert!(game.board().is_empty(Position::Center));
    assert_eq!(game.board().occupied_count(), 6);
}

#[test]
fn test_standard_never_expires() {
    let game = play(Variant::Standard, &[0, 4, 8, 2, 6, 3, 5]);
    assert_eq!(game.board().occupied_count(), 7);
    assert_eq!(game.history().len(), 7);
    assert_eq!(game.next_eviction(), None);
}

#[test]
fn test_checked_move_reports_occupied_square() {
    let game = play(Variant::Standard, &[4, 0]);
    assert_eq!(
        game.try_apply(4).err(),
        Some(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.moves_played(), 2);
}

#[test]
fn test_state_survives_json_round_trip() {
    let game = play(Variant::Vanishing, &[0, 4, 8, 2, 6, 3, 5]);
    let json = serde_json::to_string(&game).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
    assert_eq!(restored.next_eviction(), Some(Position::Center));
}

#[test]
fn test_snapshot_with_wrong_capacity_rejected() {
    let game = play(Variant::Vanishing, &[0, 4, 8, 2, 6, 3]);
    let mut value = serde_json::to_value(&game).expect("serialize");
    value["history"]["capacity"] = serde_json::Value::Null;

    let err = serde_json::from_value::<GameState>(value).expect_err("unbounded vanishing history");
    assert!(err.to_string().contains("Invalid game snapshot"));
}

#[test]
fn test_snapshot_with_wrong_turn_rejected() {
    let game = play(Variant::Standard, &[4]);
    let mut value = serde_json::to_value(&game).expect("serialize");
    value["to_move"] = serde_json::json!("X");

    assert!(serde_json::from_value::<GameState>(value.clone()).is_err());

    let session = serde_json::json!({ "game": value, "phase": "Idle" });
    assert!(serde_json::from_value::<Session>(session).is_err());
}
