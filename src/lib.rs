//! Rewind Games library - terminal tic-tac-toe with time travel
//!
//! Game rules and history live in [`rewind_tictactoe`]; this crate is the
//! presentation layer on top of it.
//!
//! # Architecture
//!
//! - **View**: pure functions producing every string the UI shows
//! - **Layout/UI**: ratatui rendering plus the screen regions used for clicks
//! - **App**: turns gestures into game operations, one at a time
//! - **Config**: TOML file and command-line overrides
//!
//! # Example
//!
//! ```
//! use rewind_games::{Action, App, status_line};
//! use rewind_tictactoe::{Position, SortOrder};
//!
//! let mut app = App::new(SortOrder::Ascending);
//! app.dispatch(Action::Play(Position::Center));
//! assert_eq!(status_line(app.game()), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use tui::{
    Action, App, AppLayout, Arrow, Focus, Input, MoveListEntry, current_label, jump_label,
    move_list, run_app, run_tui, sort_toggle_label, status_line,
};
