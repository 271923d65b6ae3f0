//! Move list rendering.

use crate::app::App;
use crate::input::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the sort label, the move list and the current-move indicator.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let border_style = match app.focus() {
        Focus::Moves => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("History");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let sort = Paragraph::new(format!("[s] {}", app.store().sort_order().button_label()))
        .style(Style::default().fg(Color::Magenta));
    f.render_widget(sort, chunks[0]);

    let items: Vec<ListItem> = app
        .move_list()
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.label()).style(style)
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected_row()));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);

    if let Some(label) = app.store().current_move_label() {
        let indicator = Paragraph::new(label).style(Style::default().fg(Color::Yellow));
        f.render_widget(indicator, chunks[2]);
    }
}
