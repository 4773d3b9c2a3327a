//! Turn alternation invariant.

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: the player to move follows from the last move.
///
/// X moves first. After a move, the turn passes to the opponent of the
/// mover unless that move completed a line, in which case it stays with
/// the winner.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(last) = game.history().last() else {
            return game.to_move() == Player::X;
        };

        let Some(mover) = game.board().get(last).player() else {
            return false;
        };

        if game.winner().is_some() {
            game.to_move() == mover
        } else {
            game.to_move() == mover.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate, and the turn freezes on the winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn test_alternation_holds() {
        let mut game = GameState::new(Variant::Standard);
        for index in [4, 0, 8] {
            game = game.apply_move(index);
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_turn_frozen_on_winner() {
        let game = [0, 3, 1, 4, 2]
            .into_iter()
            .fold(GameState::new(Variant::Standard), GameState::apply_move);
        assert!(game.winner().is_some());
        assert_eq!(game.to_move(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_flipped_turn_violates() {
        let mut game = GameState::new(Variant::Standard).apply_move(4);
        game.to_move = Player::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
