//! Pure tic-tac-toe logic with move history and time travel.
//!
//! This crate has no UI dependency. It provides:
//!
//! - **Win evaluation**: [`rules::win::evaluate`] maps a [`Board`] to a
//!   [`WinnerInfo`] using a fixed line priority.
//! - **History**: [`TimeTravelGame`] owns every board snapshot produced so far,
//!   a pointer to the displayed one, and the move-list [`SortOrder`].
//! - **Invariants**: [`invariants`] states the properties the history keeps.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameStatus, Player, Position, TimeTravelGame};
//!
//! let mut game = TimeTravelGame::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//!     Position::BottomRight,
//! ] {
//!     game.play(pos).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Go back two moves and branch.
//! game.jump_to(3);
//! game.play(Position::MiddleLeft).unwrap();
//! assert_eq!(game.len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use error::PlayError;
pub use game::{GameStatus, TimeTravelGame};
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::win::WinnerInfo;
pub use types::{Board, Player, SortOrder, Square};
