//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{Position, Session, SessionEvent, Variant};
use tracing::{debug, instrument};

/// Main application state.
///
/// The session decides everything about the game; the app only adds a
/// cursor and the quit flag.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh session.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            session: Session::new(variant),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(confirming = self.session.is_confirming()))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(event) = self.event_for(key) {
            debug!(?event, "Dispatching session event");
            self.session.dispatch(event);
        }
    }

    fn event_for(&mut self, key: KeyCode) -> Option<SessionEvent> {
        if self.session.is_confirming() {
            return match key {
                KeyCode::Char('y') | KeyCode::Enter => Some(SessionEvent::ConfirmReset),
                KeyCode::Char('n') | KeyCode::Esc => Some(SessionEvent::CancelReset),
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    None
                }
                _ => None,
            };
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => Some(SessionEvent::RequestReset),
            KeyCode::Enter | KeyCode::Char(' ') => Some(SessionEvent::Play(self.cursor.to_index())),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            other => digit_cell(other).map(|pos| {
                self.cursor = pos;
                SessionEvent::Play(pos.to_index())
            }),
        }
    }
}
