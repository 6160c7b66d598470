//! Application state and gesture dispatch.

use derive_getters::Getters;
use ratatui::Frame;
use rewind_tictactoe::{Position, SortOrder, TimeTravelGame};
use tracing::{debug, info, instrument};

use super::input::{self, Input};
use super::ui::{self, AppLayout};
use super::view;

/// A state-manager operation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current player's mark.
    Play(Position),
    /// Show an earlier (or later) history entry.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleSort,
    /// Leave the application.
    Quit,
}

/// The control that keyboard activation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A board cell.
    Board(Position),
    /// The sort-toggle button.
    SortToggle,
    /// A move-list row, counted in display order.
    MoveList(usize),
}

/// Main application state.
///
/// Cell gestures are never filtered here: every one becomes
/// [`Action::Play`] and the game decides whether it has an effect.
#[derive(Debug, Getters)]
pub struct App {
    game: TimeTravelGame,
    focus: Focus,
    layout: AppLayout,
    should_quit: bool,
}

impl App {
    /// Creates an application at the empty board.
    #[instrument]
    pub fn new(sort_order: SortOrder) -> Self {
        Self {
            game: TimeTravelGame::with_sort_order(sort_order),
            focus: Focus::Board(Position::Center),
            layout: AppLayout::default(),
            should_quit: false,
        }
    }

    /// Renders the current state and remembers the layout for hit-testing.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = AppLayout::compute(frame.area());
        ui::draw(frame, self, &layout);
        self.layout = layout;
    }

    /// Handles one terminal event to completion.
    pub fn handle_event(&mut self, event: &crossterm::event::Event) {
        if let Some(input) = input::decode(event)
            && let Some(action) = self.interpret(input)
        {
            self.dispatch(action);
        }
    }

    /// Resolves a gesture against focus and layout.
    ///
    /// Focus changes are applied directly; anything that touches the game is
    /// returned as an [`Action`].
    #[instrument(skip(self))]
    pub fn interpret(&mut self, input: Input) -> Option<Action> {
        match input {
            Input::Quit => Some(Action::Quit),
            Input::Click { column, row } => self.click(column, row),
            Input::FocusNext => {
                self.focus = match self.focus {
                    Focus::Board(_) => Focus::SortToggle,
                    Focus::SortToggle => Focus::MoveList(0),
                    Focus::MoveList(_) => Focus::Board(Position::Center),
                };
                None
            }
            Input::FocusPrev => {
                self.focus = match self.focus {
                    Focus::Board(_) => Focus::MoveList(0),
                    Focus::SortToggle => Focus::Board(Position::Center),
                    Focus::MoveList(_) => Focus::SortToggle,
                };
                None
            }
            Input::Move(arrow) => {
                self.focus = match self.focus {
                    Focus::Board(pos) => Focus::Board(input::move_cursor(pos, arrow)),
                    Focus::SortToggle => Focus::SortToggle,
                    Focus::MoveList(row) => {
                        Focus::MoveList(input::move_row(row, arrow, self.game.len()))
                    }
                };
                None
            }
            Input::Activate => match self.focus {
                Focus::Board(pos) => Some(Action::Play(pos)),
                Focus::SortToggle => Some(Action::ToggleSort),
                Focus::MoveList(row) => self.jump_target(row),
            },
        }
    }

    fn click(&mut self, column: u16, row: u16) -> Option<Action> {
        if let Some(pos) = self.layout.cell_at(column, row) {
            self.focus = Focus::Board(pos);
            return Some(Action::Play(pos));
        }
        if self.layout.on_sort_button(column, row) {
            self.focus = Focus::SortToggle;
            return Some(Action::ToggleSort);
        }
        if let Some(list_row) = self.layout.move_row_at(column, row)
            && list_row < self.game.len()
        {
            self.focus = Focus::MoveList(list_row);
            return self.jump_target(list_row);
        }
        None
    }

    /// History index behind a move-list row, `None` for the current entry.
    fn jump_target(&self, row: usize) -> Option<Action> {
        view::move_list(&self.game)
            .get(row)
            .filter(|entry| !*entry.is_current())
            .map(|entry| Action::JumpTo(*entry.index()))
    }

    /// Applies one action to the game.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                if let Err(reason) = self.game.play(pos) {
                    debug!(%reason, "Play had no effect");
                }
            }
            Action::JumpTo(move_index) => self.game.jump_to(move_index),
            Action::ToggleSort => self.game.toggle_sort(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }

        // A branch can shorten the move list under the focused row.
        if let Focus::MoveList(row) = self.focus {
            self.focus = Focus::MoveList(row.min(self.game.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Arrow;

    #[test]
    fn test_keyboard_play_and_jump() {
        let mut app = App::new(SortOrder::Ascending);
        assert_eq!(app.interpret(Input::Activate), Some(Action::Play(Position::Center)));
        app.dispatch(Action::Play(Position::Center));

        app.interpret(Input::Move(Arrow::Up));
        let action = app.interpret(Input::Activate);
        assert_eq!(action, Some(Action::Play(Position::TopCenter)));
        app.dispatch(Action::Play(Position::TopCenter));
        assert_eq!(app.game().len(), 3);

        app.interpret(Input::FocusNext);
        app.interpret(Input::FocusNext);
        assert_eq!(*app.focus(), Focus::MoveList(0));
        assert_eq!(app.interpret(Input::Activate), Some(Action::JumpTo(0)));
    }

    #[test]
    fn test_current_entry_is_not_a_button() {
        let mut app = App::new(SortOrder::Ascending);
        app.interpret(Input::FocusPrev);
        assert_eq!(*app.focus(), Focus::MoveList(0));
        assert_eq!(app.interpret(Input::Activate), None);
    }

    #[test]
    fn test_occupied_cell_still_dispatches_play() {
        let mut app = App::new(SortOrder::Ascending);
        app.dispatch(Action::Play(Position::Center));
        let before = app.game().clone();

        assert_eq!(app.interpret(Input::Activate), Some(Action::Play(Position::Center)));
        app.dispatch(Action::Play(Position::Center));
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_descending_rows_map_to_history_indices() {
        let mut app = App::new(SortOrder::Descending);
        app.dispatch(Action::Play(Position::TopLeft));
        app.dispatch(Action::Play(Position::TopRight));

        // Rows: #2 (current), #1, start.
        assert_eq!(app.jump_target(0), None);
        assert_eq!(app.jump_target(1), Some(Action::JumpTo(1)));
        assert_eq!(app.jump_target(2), Some(Action::JumpTo(0)));
        assert_eq!(app.jump_target(3), None);
    }

    #[test]
    fn test_focus_follows_shortened_move_list() {
        let mut app = App::new(SortOrder::Ascending);
        for i in 0..5 {
            app.dispatch(Action::Play(Position::from_index(i).unwrap()));
        }
        app.interpret(Input::FocusPrev);
        for _ in 0..5 {
            app.interpret(Input::Move(Arrow::Down));
        }
        assert_eq!(*app.focus(), Focus::MoveList(5));

        app.dispatch(Action::JumpTo(1));
        app.dispatch(Action::Play(Position::BottomRight));
        assert_eq!(app.game().len(), 3);
        assert_eq!(*app.focus(), Focus::MoveList(2));
        assert_eq!(app.interpret(Input::Activate), None);

        app.interpret(Input::Move(Arrow::Up));
        assert_eq!(app.interpret(Input::Activate), Some(Action::JumpTo(1)));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortOrder::Ascending);
        let action = app.interpret(Input::Quit).unwrap();
        app.dispatch(action);
        assert!(*app.should_quit());
    }
}
