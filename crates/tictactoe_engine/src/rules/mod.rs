//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board, kept apart from state storage so the
//! move applier and the invariants can share them.

pub mod win;

pub use win::{WIN_LINES, Win, WinLine, check_winner};
