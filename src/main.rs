//! Rewind Games - terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_games::{AppConfig, Cli, run_tui};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli)?;

    run_tui(&config)
}
