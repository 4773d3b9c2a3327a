//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Variant;

/// Tic-tac-toe with standard and vanishing-move rules
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal, with an optional vanishing-move rule", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Rule variant: standard or vanishing
        #[arg(long)]
        variant: Option<Variant>,

        /// File to write logs to
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a sequence of cell indices (0-8) and print the result
    Replay {
        /// Rule variant: standard or vanishing
        #[arg(long)]
        variant: Option<Variant>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Cell indices in play order
        moves: Vec<usize>,
    },
}
