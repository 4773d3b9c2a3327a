//! History consistency invariant: history matches occupied squares.

use super::Invariant;
use crate::game::GameState;

/// Invariant: every history entry is occupied, and nothing else is.
///
/// Each move in history corresponds to exactly one occupied square. An
/// expired move leaves history and board together, so the move count
/// never falls below the history length.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let all_marked = game.history().iter().all(|pos| !board.is_empty(pos));

        all_marked
            && board.occupied_count() == game.history().len()
            && game.moves_played() >= game.history().len()
    }

    fn description() -> &'static str {
        "History entries match the occupied squares"
    }
}
