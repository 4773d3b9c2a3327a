//! Headless replay of a move list.

use tictactoe_engine::{GameState, Variant};
use tracing::{info, instrument, warn};

/// Applies `moves` to a fresh game, skipping illegal ones as the board would.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(variant: Variant, moves: &[usize]) -> GameState {
    let game = moves.iter().fold(GameState::new(variant), |game, &index| {
        match game.try_apply(index) {
            Ok(next) => next,
            Err(e) => {
                warn!(index, error = %e, "Skipping move");
                game
            }
        }
    });
    info!(moves_played = game.moves_played(), status = %game.status_label(), "Replay finished");
    game
}

/// Formats a game as the board grid followed by its status lines.
pub fn render_text(game: &GameState) -> String {
    let mut out = game.board().display();
    out.push_str("\n\n");
    out.push_str(&game.status_label());
    if let Some(pos) = game.next_eviction() {
        out.push_str(&format!("\nnext to vanish: {} ({})", pos, pos.to_index()));
    }
    out
}

/// Formats a game as pretty-printed JSON.
pub fn render_json(game: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_illegal_moves_skipped() {
        let game = replay(Variant::Standard, &[4, 4, 12, 0]);
        assert_eq!(game.moves_played(), 2);
    }

    #[test]
    fn test_text_shows_status_and_expiry() {
        let game = replay(Variant::Vanishing, &[0, 4, 8, 2, 6, 3]);
        let text = render_text(&game);
        assert!(text.starts_with("X|2|O"));
        assert!(text.contains("player: X"));
        assert!(text.ends_with("next to vanish: Top-left (0)"));
    }

    #[test]
    fn test_json_names_variant() {
        let game = replay(Variant::Vanishing, &[4]);
        let json = render_json(&game).expect("serializable");
        assert!(json.contains("\"variant\": \"vanishing\""));
    }
}
