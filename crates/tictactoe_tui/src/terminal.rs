//! Interactive terminal loop.

use crate::app::App;
use crate::config::GameConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

/// Raw mode and the alternate screen, undone on drop.
///
/// Dropping restores whatever was entered, so an error partway through
/// setup still leaves the terminal usable.
struct ScreenGuard {
    alternate: bool,
}

impl ScreenGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { alternate: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.alternate = true;
        Ok(guard)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        if self.alternate {
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
                warn!(error = %e, "Failed to leave alternate screen");
            }
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip(config), fields(variant = %config.variant()))]
pub fn run(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let guard = ScreenGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.variant());
    let res = event_loop(&mut terminal, &mut app);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves_played = app.session().game().moves_played(),
        "Exiting tic-tac-toe TUI"
    );
    res
}

/// Draws, then blocks for the next key; each key is handled to completion.
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}
