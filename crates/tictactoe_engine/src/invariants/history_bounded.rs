//! History never grows past the variant's capacity.

use super::Invariant;
use crate::game::GameState;

/// Invariant: the history carries its variant's capacity and holds at
/// most that many moves.
pub struct HistoryBoundedInvariant;

impl Invariant<GameState> for HistoryBoundedInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        if history.capacity() != game.variant().history_capacity() {
            return false;
        }
        match history.capacity() {
            Some(cap) => history.len() <= cap,
            None => true,
        }
    }

    fn description() -> &'static str {
        "History capacity matches the variant and is not exceeded"
    }
}
