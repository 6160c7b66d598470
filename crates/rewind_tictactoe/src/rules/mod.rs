//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Nothing here knows
//! about history or turn order.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinnerInfo, evaluate};
