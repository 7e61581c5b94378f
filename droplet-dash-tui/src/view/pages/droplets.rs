//! Droplet list view

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthChar;

use crate::model::App;
use crate::view::theme::{Styles, colors};

/// Draw the list, its error, or its empty state.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.droplets;

    if let Some(err) = state.last_error() {
        render_error(frame, area, &err.to_string());
    } else if state.droplets().is_empty() {
        let text = if state.is_fetching() {
            "  Loading droplets..."
        } else {
            "  No droplets"
        };
        render_empty(frame, area, text);
    } else {
        render_list(app, frame, area);
    }
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled("  Could not load droplets", Style::default().fg(c.error)),
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("  Alt+r to retry", Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: false }), area);
}

fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(text.to_string(), Style::default().fg(colors().muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let width = usize::from(area.width);
    let header = droplet_dash_core::header_line(&app.columns);
    frame.render_widget(
        Paragraph::new(clip(&format!("  {header}"), width)).style(Styles::header()),
        rows[0],
    );

    let items: Vec<ListItem> = app
        .droplets
        .display_lines(&app.columns)
        .iter()
        .map(|line| ListItem::new(clip(&format!("  {line}"), width)))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(colors().fg))
        .highlight_style(Styles::selected());

    // No highlight until the user moves
    let selection = app.droplets.selection();
    let mut list_state = ListState::default();
    list_state.select(selection.index_in(app.droplets.item_count()));

    frame.render_stateful_widget(list, rows[1], &mut list_state);
}

/// Cut `text` to at most `width` terminal cells.
fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
