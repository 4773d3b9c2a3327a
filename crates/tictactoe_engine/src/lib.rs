//! Tic-tac-toe engine with standard and vanishing-move rules.
//!
//! The engine owns everything that decides what a move does: board
//! storage, win detection, turn order, move expiry in the vanishing
//! variant, and the reset confirmation flow. It performs no I/O, so any
//! front end can drive it by feeding [`SessionEvent`]s into a [`Session`]
//! and rendering what comes back.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameState, Position, Square, Player, Variant};
//!
//! let game = GameState::new(Variant::Vanishing)
//!     .apply_move(4)
//!     .apply_move(0);
//! assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
//! assert_eq!(game.status_label(), "player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod position;
mod rules;
mod session;
mod types;
mod variant;

pub mod invariants;

pub use action::{MoveError, SnapshotError};
pub use contracts::{Contract, LegalMove, MoveContract, NoWinner, SquareIsEmpty};
pub use game::{GameOutcome, GameState};
pub use history::MoveHistory;
pub use position::Position;
pub use rules::{WIN_LINES, Win, WinLine, check_winner};
pub use session::{ResetPhase, Session, SessionEvent};
pub use types::{Board, Player, Square};
pub use variant::{VANISHING_CAPACITY, Variant};
