//! First-class invariants for the move history.
//!
//! Invariants are logical properties that hold after every operation on a
//! [`TimeTravelGame`]. They are checked in debug builds and can be tested
//! independently.

use crate::{Board, Player, TimeTravelGame};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// Invariant: each entry differs from its predecessor in exactly its last move.
///
/// The first entry is the empty board with no last move.
pub struct SingleCellDeltaInvariant;

impl Invariant<TimeTravelGame> for SingleCellDeltaInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if *first.board() != Board::new() || first.last_move().is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match next.last_move() {
                Some(pos) => prev.board().diff(next.board()) == [pos] && prev.board().is_empty(pos),
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its last move"
    }
}

/// Invariant: marks alternate X, O, X, ... along the history.
pub struct AlternatingMarkInvariant;

impl Invariant<TimeTravelGame> for AlternatingMarkInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(i, entry)| entry.player() == Some(Player::for_move(i - 1)))
    }

    fn description() -> &'static str {
        "Entry i holds the mark of the player for move i - 1"
    }
}

/// Invariant: the cursor points into the history.
pub struct CursorInRangeInvariant;

impl Invariant<TimeTravelGame> for CursorInRangeInvariant {
    fn holds(game: &TimeTravelGame) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move indexes an existing history entry"
    }
}

/// All history invariants as a composable set.
pub type TimeTravelInvariants = (
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
    CursorInRangeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::Position;

    fn sample_game() -> TimeTravelGame {
        let mut game = TimeTravelGame::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            game.play(pos).unwrap();
        }
        game
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TimeTravelInvariants::check_all(&TimeTravelGame::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut game = sample_game();
        game.jump_to(1);
        game.play(Position::BottomLeft).unwrap();
        assert!(TimeTravelInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_double_mark_violates_delta() {
        let mut game = sample_game();
        let board = game.current_board()
            .with_mark(Position::BottomLeft, Player::O)
            .with_mark(Position::BottomRight, Player::O);
        game.history.push(HistoryEntry::after_move(board, Position::BottomLeft));

        assert!(!SingleCellDeltaInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_violates_alternation() {
        let mut game = sample_game();
        let board = game.current_board().with_mark(Position::BottomLeft, Player::X);
        game.history.push(HistoryEntry::after_move(board, Position::BottomLeft));

        assert!(SingleCellDeltaInvariant::holds(&game));
        assert!(!AlternatingMarkInvariant::holds(&game));
    }

    #[test]
    fn test_cursor_out_of_range_detected() {
        let mut game = sample_game();
        game.current_move = 10;

        let violations = TimeTravelInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, CursorInRangeInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (SingleCellDeltaInvariant, CursorInRangeInvariant);
        assert!(TwoInvariants::check_all(&sample_game()).is_ok());
    }
}
