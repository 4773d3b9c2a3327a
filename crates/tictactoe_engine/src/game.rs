//! Game state and its transitions.
//!
//! Every transition takes the current state by value and returns the
//! next one. Illegal moves come back unchanged; [`GameState::try_place`]
//! reports why.

use crate::action::{MoveError, SnapshotError};
use crate::contracts::{Contract, MoveContract};
use crate::history::MoveHistory;
use crate::invariants;
use crate::position::Position;
use crate::rules::{Win, check_winner};
use crate::types::{Board, Player, Square};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line completed yet.
    InProgress,
    /// A line was completed.
    Won(Win),
}

/// Complete game state.
///
/// The default is an empty standard game. Deserialized states must
/// satisfy every game invariant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    pub(crate) variant: Variant,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: MoveHistory,
    pub(crate) moves_played: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameSnapshot {
    variant: Variant,
    board: Board,
    to_move: Player,
    history: MoveHistory,
    moves_played: usize,
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = SnapshotError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let game = Self {
            variant: snapshot.variant,
            board: snapshot.board,
            to_move: snapshot.to_move,
            history: snapshot.history,
            moves_played: snapshot.moves_played,
        };

        invariants::check_game(&game).map_err(|violations| {
            let described = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(violations = %described, "Rejected game snapshot");
            SnapshotError::new(described)
        })?;

        Ok(game)
    }
}

impl GameState {
    /// Creates an empty game with X to move.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            board: Board::new(),
            to_move: Player::X,
            history: MoveHistory::new(variant.history_capacity()),
            moves_played: 0,
        }
    }

    /// The rule variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move, or the winner once a line is complete.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Positions currently on the board, oldest first.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Number of moves applied since the last reset, expired ones included.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Derives the outcome from the board.
    pub fn outcome(&self) -> GameOutcome {
        match check_winner(&self.board) {
            Some(win) => GameOutcome::Won(win),
            None => GameOutcome::InProgress,
        }
    }

    /// The completed line, if any.
    pub fn winner(&self) -> Option<Win> {
        check_winner(&self.board)
    }

    /// Checks whether a mark may be placed at `pos`.
    pub fn is_legal(&self, pos: Position) -> bool {
        MoveContract::pre(self, &pos).is_ok()
    }

    /// Every position a mark may be placed at.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_legal(*pos))
            .collect()
    }

    /// True when the game is undecided but no cell can be played.
    ///
    /// Only reachable in the standard variant, on a full board.
    pub fn is_stalled(&self) -> bool {
        self.winner().is_none() && self.board.is_full()
    }

    /// The cell the next move would expire, if the vanishing history is full.
    pub fn next_eviction(&self) -> Option<Position> {
        if self.winner().is_some() {
            return None;
        }
        self.history.next_to_expire()
    }

    /// Status line: `player: X` while undecided, `winner: X` after.
    pub fn status_label(&self) -> String {
        match self.outcome() {
            GameOutcome::InProgress => format!("player: {}", self.to_move),
            GameOutcome::Won(win) => format!("winner: {}", win.player),
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if a line is already complete
    /// - [`MoveError::SquareOccupied`] if `pos` holds a mark
    /// - [`MoveError::InvariantViolation`] if the result is inconsistent
    #[instrument(skip(self), fields(player = %self.to_move, variant = %self.variant))]
    pub fn try_place(&self, pos: Position) -> Result<Self, MoveError> {
        MoveContract::pre(self, &pos)?;

        let mut next = self.clone();
        next.place_unchecked(pos);

        MoveContract::post(self, &next)?;
        Ok(next)
    }

    /// Places a mark by board index (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] past 8, otherwise as [`GameState::try_place`].
    pub fn try_apply(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_place(pos)
    }

    /// Applies a move by board index, ignoring it if illegal.
    pub fn apply_move(self, index: usize) -> Self {
        match self.try_apply(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(index, error = %e, "Move ignored");
                self
            }
        }
    }

    /// A fresh game under the same variant.
    #[instrument(skip(self), fields(moves_played = self.moves_played))]
    pub fn reset(&self) -> Self {
        debug!("Resetting game");
        Self::new(self.variant)
    }

    fn place_unchecked(&mut self, pos: Position) {
        let player = self.to_move;

        // The queue decides on its pre-push length, so the expired cell is
        // always an old mark and never `pos`.
        if let Some(expired) = self.history.record(pos) {
            self.board.clear(expired);
        }
        self.board.set(pos, Square::Occupied(player));
        self.moves_played += 1;

        match check_winner(&self.board) {
            Some(win) => {
                debug!(winner = %win.player, line = ?win.line.indices(), "Line completed");
            }
            None => self.advance_turn(),
        }
    }

    fn advance_turn(&mut self) {
        self.to_move = self.to_move.opponent();
        debug!(to_move = %self.to_move, "Turn advanced");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_marks_and_flips() {
        let game = GameState::new(Variant::Standard).apply_move(4);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.moves_played(), 1);
        assert_eq!(game.status_label(), "player: O");
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let game = GameState::new(Variant::Standard);
        assert_eq!(game.try_apply(9).err(), Some(MoveError::OutOfBounds(9)));
        assert_eq!(game.clone().apply_move(9), game);
    }

    #[test]
    fn test_occupied_is_noop() {
        let game = GameState::new(Variant::Standard).apply_move(0);
        assert_eq!(game.clone().apply_move(0), game);
    }

    #[test]
    fn test_stalled_full_board() {
        // X O X / X O O / O X X: full, no line.
        let game = [0, 1, 2, 4, 3, 5, 7, 6, 8]
            .into_iter()
            .fold(GameState::new(Variant::Standard), GameState::apply_move);
        assert!(game.winner().is_none());
        assert!(game.is_stalled());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.status_label(), "player: O");
    }

    #[test]
    fn test_next_eviction_only_when_full() {
        let mut game = GameState::new(Variant::Vanishing);
        for index in [0, 4, 8, 2, 6] {
            game = game.apply_move(index);
            assert_eq!(game.next_eviction(), None);
        }
        game = game.apply_move(3);
        assert_eq!(game.next_eviction(), Some(Position::TopLeft));
    }

    #[test]
    fn test_default_is_empty_standard_game() {
        assert_eq!(GameState::default(), GameState::new(Variant::Standard));
    }

    #[test]
    fn test_reset_keeps_variant() {
        let game = GameState::new(Variant::Vanishing).apply_move(4).reset();
        assert_eq!(game, GameState::new(Variant::Vanishing));
    }
}
