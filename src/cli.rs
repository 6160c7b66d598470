//! Command-line interface for rewind_games.

use clap::Parser;
use std::path::PathBuf;

/// Rewind Games - terminal tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with a move history you can jump around in", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "rewind_games.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "rewind_tictactoe=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
