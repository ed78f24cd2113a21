//! Tic-tac-toe board rendering.

use crate::session::{CellView, GameSession};
use crate::store::KeyValueStore;
use hotseat_rules::{Cell, Mark};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

const TOMATO: Color = Color::Rgb(255, 99, 71);
const TEAL: Color = Color::Rgb(0, 128, 128);

/// Draws title, board, status line and key help.
pub fn render<S: KeyValueStore>(f: &mut Frame, session: &GameSession<S>, cursor: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(11),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], &session.cells(), cursor);

    let status = Paragraph::new(session.status_text())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move | enter/space or 1-9 play | r reset | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}

fn render_board(f: &mut Frame, area: Rect, cells: &[CellView; 9], cursor: usize) {
    let board_area = center_rect(area, 31, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        render_row(f, rows[row], &cells[start..start + 3], cursor);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(f: &mut Frame, area: Rect, cells: &[CellView], cursor: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (col, view) in [0, 2, 4].into_iter().zip(cells) {
        render_cell(f, cols[col], view, cursor == *view.index());
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(f: &mut Frame, area: Rect, view: &CellView, selected: bool) {
    let (text, mut style) = match view.cell() {
        Cell::Empty => (
            format!("{}", view.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (
            view.label().to_string(),
            Style::default().fg(mark_color(*mark)).add_modifier(Modifier::BOLD),
        ),
    };
    if *view.highlighted() {
        style = style.bg(Color::Yellow);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => TOMATO,
        Mark::O => TEAL,
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
