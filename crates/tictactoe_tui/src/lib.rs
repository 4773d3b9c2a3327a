//! Terminal client for tic-tac-toe.
//!
//! A thin front end over [`tictactoe_engine`]: keys become session
//! events, and the screen is redrawn from whatever the session reports.
//!
//! # Architecture
//!
//! - **App**: session plus cursor, maps keys to events
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Config**: TOML settings with command-line overrides
//! - **Replay**: headless application of a move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod terminal;
mod ui;

// Crate-level exports - Application state
pub use app::App;

// Crate-level exports - Command line and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Input and rendering
pub use input::{digit_cell, move_cursor};
pub use ui::{CONFIRM_TITLE, STALLED_HINT, draw};

// Crate-level exports - Runners
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{render_json, render_text, replay};
pub use terminal::run;
