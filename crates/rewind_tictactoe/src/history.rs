//! History entries.

use crate::{Board, Player, Position};

/// One board snapshot in the game history plus the move that produced it.
///
/// Entries are never changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The empty board that starts every game.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn after_move(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell played to reach this snapshot, `None` for the initial entry.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// The player whose mark was placed at [`last_move`](Self::last_move).
    pub fn player(&self) -> Option<Player> {
        self.last_move.and_then(|pos| self.board.get(pos).player())
    }
}
