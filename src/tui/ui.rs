//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, WinnerInfo};

use super::app::{App, Focus};
use super::view;

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "Click or Enter: activate | Tab: switch panel | Arrows: move | q: Quit";

/// Screen regions of the last rendered frame, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// Grid cells in board index order.
    pub cells: [Rect; 9],
    /// Horizontal separators between grid rows.
    pub row_separators: [Rect; 2],
    /// Vertical separators between grid columns, two per row.
    pub col_separators: [Rect; 6],
    /// Sort-toggle button.
    pub sort_button: Rect,
    /// Move list, including its border.
    pub move_list: Rect,
    /// Move list rows area (inside the border), one entry per line.
    pub move_rows: Rect,
    /// Help line.
    pub help: Rect,
}

impl AppLayout {
    /// Splits the terminal area into the UI regions.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        let board_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(GRID_HEIGHT)])
            .split(body[0]);

        let info_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body[1]);

        let grid = center_rect(board_column[1], GRID_WIDTH, GRID_HEIGHT);
        let (cells, row_separators, col_separators) = grid_cells(grid);

        let move_list = info_column[1];
        let move_rows = Block::default().borders(Borders::ALL).inner(move_list);

        Self {
            title: chunks[0],
            status: board_column[0],
            cells,
            row_separators,
            col_separators,
            sort_button: centered_width(info_column[0], 22),
            move_list,
            move_rows,
            help: chunks[2],
        }
    }

    /// Board cell under a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Whether a terminal coordinate lies on the sort-toggle button.
    pub fn on_sort_button(&self, column: u16, row: u16) -> bool {
        self.sort_button.contains(ScreenPosition::new(column, row))
    }

    /// Move-list row (display order) under a terminal coordinate.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if self.move_rows.contains(ScreenPosition::new(column, row)) {
            Some(usize::from(row - self.move_rows.y))
        } else {
            None
        }
    }
}

/// Draws the whole UI for `app` into the regions of `layout`.
pub fn draw(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let game = app.game();

    let title = Paragraph::new("Rewind Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(view::status_line(game))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    draw_board(frame, app, layout);
    draw_sort_button(frame, app, layout.sort_button);
    draw_move_list(frame, app, layout);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let board = app.game().current_board();
    let winner_info = app.game().winner_info();
    let cursor = match app.focus() {
        Focus::Board(pos) => Some(*pos),
        _ => None,
    };

    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.to_index()], board.get(pos), pos, &winner_info, cursor);
    }

    for sep in layout.row_separators {
        let line = Paragraph::new("─".repeat(usize::from(sep.width)))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }

    for sep in layout.col_separators {
        let bar = Paragraph::new(vec![Line::from("│"); usize::from(sep.height)])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(bar, sep);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    winner_info: &WinnerInfo,
    cursor: Option<Position>,
) {
    let (symbol, mut style) = match square {
        Square::Empty => (" ", Style::default()),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if winner_info.contains(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![Line::from(""), Line::from(Span::raw(symbol)), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_sort_button(frame: &mut Frame, app: &App, area: Rect) {
    let mut style = Style::default().fg(Color::Cyan);
    if matches!(app.focus(), Focus::SortToggle) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let button = Paragraph::new(view::sort_toggle_label(app.game().sort_order()))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn draw_move_list(frame: &mut Frame, app: &App, layout: &AppLayout) {
    let focused_row = match app.focus() {
        Focus::MoveList(row) => Some(*row),
        _ => None,
    };

    let items: Vec<ListItem> = view::move_list(app.game())
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
            };
            if focused_row == Some(row) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}. ", row + 1)),
                Span::styled(entry.label().clone(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, layout.move_list);
}

/// Cell rectangles and separators of a grid occupying `area`.
fn grid_cells(area: Rect) -> ([Rect; 9], [Rect; 2], [Rect; 6]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);

    let mut cells = [Rect::default(); 9];
    let mut col_separators = [Rect::default(); 6];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        cells[r * 3] = cols[0];
        cells[r * 3 + 1] = cols[2];
        cells[r * 3 + 2] = cols[4];
        col_separators[r * 2] = cols[1];
        col_separators[r * 2 + 1] = cols[3];
    }

    (cells, [rows[1], rows[3]], col_separators)
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
