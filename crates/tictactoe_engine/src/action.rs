//! Move rejection reasons.

use crate::position::Position;

/// Why a move could not be applied.
///
/// The engine treats every rejection as a no-op; this type exists so the
/// checked entry points can say which precondition failed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A line has already been completed.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// A deserialized game state that breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid game snapshot: {}", _0)]
pub struct SnapshotError(String);

impl SnapshotError {
    pub(crate) fn new(violations: impl Into<String>) -> Self {
        Self(violations.into())
    }
}

impl std::error::Error for SnapshotError {}
