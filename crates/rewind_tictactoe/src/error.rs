//! Reasons a play request is ignored.

use crate::{Player, Position};

/// Why [`TimeTravelGame::play`](crate::TimeTravelGame::play) left the state unchanged.
///
/// These are not failures to surface to a user: a click on an occupied
/// square or after the game ended simply has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    /// The displayed board already has a winner.
    #[display("Game is already over: {} won", _0)]
    GameOver(#[error(not(source))] Player),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}
