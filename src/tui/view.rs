//! Presentation model: the text the UI shows, independent of the terminal.

use derive_getters::Getters;
use derive_new::new;
use rewind_tictactoe::{GameStatus, Position, SortOrder, TimeTravelGame};
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct MoveListEntry {
    /// History index this row refers to.
    index: usize,
    /// Text shown for the row.
    label: String,
    /// The displayed move: plain text, not a jump button.
    is_current: bool,
}

/// Status line for the displayed board.
#[instrument(skip(game))]
pub fn status_line(game: &TimeTravelGame) -> String {
    match game.status() {
        GameStatus::Won(winner) => format!("Winner: {}", winner),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress { next } => format!("Next player: {}", next),
    }
}

/// Button label for jumping to `index`, whose move was `last_move`.
pub fn jump_label(index: usize, last_move: Option<Position>) -> String {
    match last_move {
        Some(pos) if index > 0 => {
            format!("Go to move #{} ({}, {})", index, pos.row(), pos.col())
        }
        _ => "Go to game start".to_string(),
    }
}

/// Text for the displayed move.
pub fn current_label(index: usize) -> String {
    format!("You are at move #{}", index)
}

/// Label of the sort control, naming the order it switches to.
pub fn sort_toggle_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "Sort Descending",
        SortOrder::Descending => "Sort Ascending",
    }
}

/// Move list rows in display order.
#[instrument(skip(game), fields(sort_order = ?game.sort_order()))]
pub fn move_list(game: &TimeTravelGame) -> Vec<MoveListEntry> {
    let mut entries: Vec<MoveListEntry> = game
        .history()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if index == game.current_move() {
                MoveListEntry::new(index, current_label(index), true)
            } else {
                MoveListEntry::new(index, jump_label(index, entry.last_move()), false)
            }
        })
        .collect();

    if game.sort_order() == SortOrder::Descending {
        entries.reverse();
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_after(indices: &[usize]) -> TimeTravelGame {
        let mut game = TimeTravelGame::new();
        for &i in indices {
            game.play(Position::from_index(i).unwrap()).unwrap();
        }
        game
    }

    #[test]
    fn test_status_next_player() {
        assert_eq!(status_line(&TimeTravelGame::new()), "Next player: X");
        assert_eq!(status_line(&game_after(&[4])), "Next player: O");
    }

    #[test]
    fn test_status_winner_and_draw() {
        assert_eq!(status_line(&game_after(&[0, 1, 4, 2, 8])), "Winner: X");
        assert_eq!(status_line(&game_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8])), "Draw");
    }

    #[test]
    fn test_status_winner_beats_full_board() {
        let game = game_after(&[0, 1, 2, 4, 3, 5, 7, 8, 6]);
        assert!(game.current_board().is_full());
        assert_eq!(status_line(&game), "Winner: X");
    }

    #[test]
    fn test_jump_labels() {
        assert_eq!(jump_label(0, None), "Go to game start");
        assert_eq!(jump_label(1, Some(Position::Center)), "Go to move #1 (2, 2)");
        assert_eq!(jump_label(3, Some(Position::TopRight)), "Go to move #3 (1, 3)");
        assert_eq!(jump_label(2, Some(Position::BottomLeft)), "Go to move #2 (3, 1)");
    }

    #[test]
    fn test_sort_label_names_next_order() {
        assert_eq!(sort_toggle_label(SortOrder::Ascending), "Sort Descending");
        assert_eq!(sort_toggle_label(SortOrder::Descending), "Sort Ascending");
    }

    #[test]
    fn test_move_list_ascending() {
        let game = game_after(&[4, 0]);
        let labels: Vec<String> = move_list(&game).into_iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Go to game start", "Go to move #1 (2, 2)", "You are at move #2"]
        );
    }

    #[test]
    fn test_move_list_descending_after_jump() {
        let mut game = game_after(&[4, 0]);
        game.jump_to(0);
        game.toggle_sort();

        let entries = move_list(&game);
        let indices: Vec<usize> = entries.iter().map(|e| *e.index()).collect();
        assert_eq!(indices, [2, 1, 0]);
        assert_eq!(entries[2].label(), "You are at move #0");
        assert!(*entries[2].is_current());
        assert_eq!(entries[0].label(), "Go to move #2 (1, 1)");
    }
}
