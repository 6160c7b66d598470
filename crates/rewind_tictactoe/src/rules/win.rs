//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Winning lines in priority order: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Terminal-state result for a board: the winner and the line they completed.
///
/// Both parts are present or both are absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WinnerInfo {
    win: Option<(Player, [Position; 3])>,
}

impl WinnerInfo {
    /// No winner on the board.
    pub fn none() -> Self {
        Self { win: None }
    }

    /// `player` completed `line`.
    pub fn won(player: Player, line: [Position; 3]) -> Self {
        Self {
            win: Some((player, line)),
        }
    }

    /// The winning player.
    pub fn winner(&self) -> Option<Player> {
        self.win.map(|(player, _)| player)
    }

    /// The completed line.
    pub fn line(&self) -> Option<[Position; 3]> {
        self.win.map(|(_, line)| line)
    }

    /// Whether a line is complete.
    pub fn is_won(&self) -> bool {
        self.win.is_some()
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates a board for a completed line.
///
/// Lines are checked in [`LINES`] order and the first complete one is
/// reported. The board is not assumed to be reachable by legal play.
#[instrument]
pub fn evaluate(board: &Board) -> WinnerInfo {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return WinnerInfo::won(player, line);
        }
    }

    WinnerInfo::none()
}
