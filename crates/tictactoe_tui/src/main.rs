//! Tic-tac-toe - unified CLI

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{
    Cli, Command, GameConfig, init_file_logging, init_stderr_logging, render_json, render_text,
    replay, run,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli.config)?;

    match cli.command {
        Command::Play { variant, log_file } => {
            let config = config.with_overrides(variant, log_file);
            init_file_logging(&config)?;
            run(&config)
        }
        Command::Replay {
            variant,
            json,
            moves,
        } => {
            let config = config.with_overrides(variant, None);
            init_stderr_logging(&config);
            let game = replay(*config.variant(), &moves);
            let output = if json {
                render_json(&game)?
            } else {
                render_text(&game)
            };
            println!("{}", output);
            Ok(())
        }
    }
}
