//! Tests for the reset confirmation flow.

use tictactoe_engine::{Position, ResetPhase, Session, SessionEvent, Variant};

fn session_after(variant: Variant, moves: &[usize]) -> Session {
    moves.iter().fold(Session::new(variant), |session, index| {
        session.handle(SessionEvent::Play(*index))
    })
}

#[test]
fn test_reset_after_win_is_immediate() {
    let session = session_after(Variant::Standard, &[0, 3, 1, 4, 2]);
    assert!(session.game().winner().is_some());

    let session = session.handle(SessionEvent::RequestReset);

    assert_eq!(session.phase(), ResetPhase::Idle);
    assert_eq!(session, Session::new(Variant::Standard));
}

#[test]
fn test_reset_in_progress_waits_for_confirmation() {
    let before = session_after(Variant::Standard, &[4, 0]);

    let confirming = before.clone().handle(SessionEvent::RequestReset);

    assert_eq!(confirming.phase(), ResetPhase::Confirming);
    assert_eq!(confirming.game(), before.game());

    let reset = confirming.handle(SessionEvent::ConfirmReset);
    assert_eq!(reset, Session::new(Variant::Standard));
    assert!(!reset.reset_enabled());
}

#[test]
fn test_cancel_keeps_game() {
    let before = session_after(Variant::Vanishing, &[0, 4, 8, 2, 6, 3, 5]);

    let after = before
        .clone()
        .handle(SessionEvent::RequestReset)
        .handle(SessionEvent::CancelReset);

    assert_eq!(after, before);
    assert_eq!(after.game().next_eviction(), Some(Position::Center));
}

#[test]
fn test_repeated_request_while_confirming_is_inert() {
    let confirming = session_after(Variant::Standard, &[4]).handle(SessionEvent::RequestReset);
    let again = confirming.clone().handle(SessionEvent::RequestReset);
    assert_eq!(again, confirming);
}

#[test]
fn test_reset_keeps_vanishing_rules() {
    let session = session_after(Variant::Vanishing, &[0, 1, 2, 3, 4, 5, 6])
        .handle(SessionEvent::RequestReset)
        .handle(SessionEvent::Play(0));

    assert_eq!(session.game().variant(), Variant::Vanishing);
    assert_eq!(session.game().history().capacity(), Some(6));
    assert_eq!(session.game().moves_played(), 1);
}

#[test]
fn test_cells_disabled_after_win() {
    let session = session_after(Variant::Standard, &[0, 3, 1, 4, 2]);
    assert!(Position::ALL.iter().all(|pos| !session.is_cell_enabled(*pos)));
}

#[test]
fn test_stalled_board_needs_confirmation() {
    let session = session_after(Variant::Standard, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(session.game().is_stalled());
    assert_eq!(session.primary_action_label(), "reset");

    let session = session.handle(SessionEvent::RequestReset);
    assert!(session.is_confirming());
}
