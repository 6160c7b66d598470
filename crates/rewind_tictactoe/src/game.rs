//! Game state manager with time-travel navigation.
//!
//! [`TimeTravelGame`] keeps every board produced so far. The displayed board
//! is selected by a cursor into that history, and playing from an earlier
//! point discards the entries after it before appending the new move.

use crate::history::HistoryEntry;
use crate::rules::{draw, win};
use crate::{Board, PlayError, Player, Position, SortOrder, WinnerInfo};
use tracing::{debug, instrument};

/// Status of the displayed board, derived on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// No line is complete and empty squares remain.
    InProgress {
        /// Player who moves next.
        next: Player,
    },
    /// A player completed a line.
    Won(Player),
    /// Every square is occupied with no completed line.
    Draw,
}

/// Move history, current-move cursor and move-list ordering.
///
/// Mutated only through [`play`](Self::play), [`jump_to`](Self::jump_to) and
/// [`toggle_sort`](Self::toggle_sort). Winner and status are recomputed from
/// the current board on every call rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeTravelGame {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_move: usize,
    pub(crate) sort_order: SortOrder,
}

impl TimeTravelGame {
    /// Creates a game at the empty board with an ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    /// Creates a game at the empty board with the given move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_move: 0,
            sort_order,
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Any entries after the current move are discarded before the new board
    /// is appended, and the cursor moves to it.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::GameOver`] if the displayed board already has a
    /// winner and [`PlayError::SquareOccupied`] if `pos` is taken. The state
    /// is unchanged in both cases.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), PlayError> {
        let board = *self.current_board();

        if let Some(winner) = win::evaluate(&board).winner() {
            debug!(%winner, "Ignoring play on finished game");
            return Err(PlayError::GameOver(winner));
        }

        if !board.is_empty(pos) {
            debug!("Ignoring play on occupied square");
            return Err(PlayError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let next = board.with_mark(pos, player);

        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Branching: discarding future moves");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::after_move(next, pos));
        self.current_move = self.history.len() - 1;

        debug!(%player, move_index = self.current_move, "Move played");

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{InvariantSet, TimeTravelInvariants};
            if let Err(violations) = TimeTravelInvariants::check_all(self) {
                for violation in violations {
                    tracing::error!(description = %violation.description, "Invariant violated");
                }
            }
        }

        Ok(())
    }

    /// Moves the cursor to `move_index` without touching the history.
    ///
    /// # Panics
    ///
    /// Panics if `move_index` is not a valid history index. Callers only
    /// offer indices taken from [`history`](Self::history).
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) {
        assert!(
            move_index < self.history.len(),
            "jump_to({move_index}) out of range for history of length {}",
            self.history.len()
        );
        self.current_move = move_index;
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }

    /// All history entries, game start first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of history entries (at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the history holds at least the game-start entry.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the displayed entry.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Whether the cursor is at the last entry.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// The displayed entry.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_move]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player whose mark the next play places.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner and winning line of the displayed board.
    pub fn winner_info(&self) -> WinnerInfo {
        win::evaluate(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = win::evaluate(board).winner() {
            GameStatus::Won(winner)
        } else if draw::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }
}

impl Default for TimeTravelGame {
    fn default() -> Self {
        Self::new()
    }
}
