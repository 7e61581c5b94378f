//! Main layout

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// Draw one frame.
pub fn render(app: &App, frame: &mut Frame) {
    // Title bar + droplet list + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(app, frame, main_layout[0]);
    render_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // Modal goes on top
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", app.title))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Droplets ({}) ", app.droplets.item_count()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::droplets::render(app, frame, inner_area);
}
