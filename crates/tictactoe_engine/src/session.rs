//! A playing session: one game plus the reset confirmation flow.
//!
//! Every input the interactive surface can produce is a [`SessionEvent`];
//! [`Session::handle`] runs it to completion and returns the next session.

use crate::game::{GameOutcome, GameState};
use crate::position::Position;
use crate::rules::WinLine;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where the reset flow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResetPhase {
    /// No dialog open.
    #[default]
    Idle,
    /// Asking whether to abandon the current game.
    Confirming,
}

/// A discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Place a mark at a board index (0-8).
    Play(usize),
    /// Press the reset / play-again control.
    RequestReset,
    /// Answer yes in the confirmation dialog.
    ConfirmReset,
    /// Answer no in the confirmation dialog.
    CancelReset,
}

/// Game state and reset phase, owned by one interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    game: GameState,
    phase: ResetPhase,
}

impl Session {
    /// Starts a session with an empty board.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            game: GameState::new(variant),
            phase: ResetPhase::Idle,
        }
    }

    /// The current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The reset flow phase.
    pub fn phase(&self) -> ResetPhase {
        self.phase
    }

    /// True while the confirmation dialog is open.
    pub fn is_confirming(&self) -> bool {
        self.phase == ResetPhase::Confirming
    }

    /// Runs one input event to completion.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::Play(index) => self.play(index),
            SessionEvent::RequestReset => self.request_reset(),
            SessionEvent::ConfirmReset => self.confirm_reset(),
            SessionEvent::CancelReset => self.cancel_reset(),
        }
    }

    /// In-place form of [`Session::handle`].
    pub fn dispatch(&mut self, event: SessionEvent) {
        let current = std::mem::take(self);
        *self = current.handle(event);
    }

    /// Places a mark; ignored while the dialog is open.
    pub fn play(self, index: usize) -> Self {
        if self.is_confirming() {
            debug!(index, "Play ignored while confirming reset");
            return self;
        }
        Self {
            game: self.game.apply_move(index),
            phase: self.phase,
        }
    }

    /// Presses the reset / play-again control.
    ///
    /// A decided game resets at once. An undecided game with moves on it
    /// opens the confirmation dialog. With no moves the control is inert.
    pub fn request_reset(self) -> Self {
        if !self.reset_enabled() || self.is_confirming() {
            debug!("Reset request ignored");
            return self;
        }
        match self.game.outcome() {
            GameOutcome::Won(_) => {
                debug!("Game decided, resetting without confirmation");
                self.reset()
            }
            GameOutcome::InProgress => {
                debug!("Asking for reset confirmation");
                Self {
                    game: self.game,
                    phase: ResetPhase::Confirming,
                }
            }
        }
    }

    /// Confirms the pending reset.
    pub fn confirm_reset(self) -> Self {
        if !self.is_confirming() {
            return self;
        }
        debug!("Reset confirmed");
        self.reset()
    }

    /// Dismisses the pending reset, leaving the game untouched.
    pub fn cancel_reset(self) -> Self {
        if !self.is_confirming() {
            return self;
        }
        debug!("Reset cancelled");
        Self {
            game: self.game,
            phase: ResetPhase::Idle,
        }
    }

    fn reset(self) -> Self {
        Self {
            game: self.game.reset(),
            phase: ResetPhase::Idle,
        }
    }

    /// Whether the reset / play-again control accepts input.
    pub fn reset_enabled(&self) -> bool {
        self.game.moves_played() > 0
    }

    /// Label for the reset / play-again control.
    pub fn primary_action_label(&self) -> &'static str {
        match self.game.outcome() {
            GameOutcome::Won(_) => "play again",
            GameOutcome::InProgress => "reset",
        }
    }

    /// Whether the cell at `pos` accepts input.
    pub fn is_cell_enabled(&self, pos: Position) -> bool {
        !self.is_confirming() && self.game.is_legal(pos)
    }

    /// The completed line to highlight, if any.
    pub fn highlighted(&self) -> Option<WinLine> {
        self.game.winner().map(|win| win.line)
    }

    /// Status line, see [`GameState::status_label`].
    pub fn status_label(&self) -> String {
        self.game.status_label()
    }
}
