//! Console minefield walk (default binary).
//!
//! Reads one command per line from stdin and prints the game to stdout.
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

use std::io;

use anyhow::Result;
use crossterm::tty::IsTty;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use minewalk::config::{parse_args, GameConfig, USAGE};
use minewalk::core::{Actor, Board, Game};
use minewalk::engine::GameController;
use minewalk::term::ConsoleUi;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Some(config)) => config,
        Ok(None) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return Ok(());
        }
    };

    // Last-resort boundary: report and exit normally.
    if let Err(e) = run(&config) {
        error!(error = %e, "unexpected error");
        println!("An unexpected error occurred: {e}");
    }
    Ok(())
}

fn run(config: &GameConfig) -> Result<()> {
    let board = match config.seed {
        Some(seed) => Board::with_seed(config.rows, config.cols, seed)?,
        None => Board::new(config.rows, config.cols)?,
    };
    let actor = Actor::with_lives(config.lives)?;
    let game = Game::new(board, move || actor, config.mines)?;

    let stdout = io::stdout();
    let color = config.color && stdout.is_tty();
    let ui = ConsoleUi::new(io::stdin().lock(), stdout.lock()).with_color(color);

    let mut controller = GameController::new(game, ui);
    let outcome = controller.start_game();
    info!(outcome = outcome.as_str(), "game finished");
    Ok(())
}
