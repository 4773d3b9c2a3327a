//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every
//! transition. The move contract checks them as a postcondition, and
//! each one is testable on its own.

mod alternating_turn;
mod history_bounded;
mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_bounded::HistoryBoundedInvariant;
pub use history_consistent::HistoryConsistentInvariant;

use crate::game::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose without allocation.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2) as InvariantSet<S>>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of [`GameState`].
pub type GameInvariants = (
    HistoryBoundedInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);

/// Checks every game invariant.
pub fn check_game(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    #[test]
    fn test_fresh_game_satisfies_all() {
        assert!(check_game(&GameState::new(Variant::Standard)).is_ok());
        assert!(check_game(&GameState::new(Variant::Vanishing)).is_ok());
    }

    #[test]
    fn test_reports_every_violation() {
        let mut game = GameState::new(Variant::Standard).apply_move(4);
        // Wipe the board under the history: the history no longer matches,
        // and the last mover no longer owns their cell.
        game.board = crate::Board::new();

        let violations = check_game(&game).expect_err("corrupted state");
        assert_eq!(violations.len(), 2);
    }
}
