//! Bottom status bar

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::App;
use crate::view::theme::Styles;

/// Draw key hints, the refresh phase and the latest status message.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    spans.push(separator());
    spans.push(Span::raw(state_text(app)));

    if let Some(ref msg) = app.status_message {
        spans.push(separator());
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(Color::DarkGray))
}

fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Esc", "Close"), ("Enter", "Confirm")];
    }

    let mut hints = vec![("↑↓", "Select")];
    if app.droplets.current().is_some() {
        hints.push(("Enter", "Details"));
        hints.push(("Alt+d/b/s/p", "Destroy/Reboot/Shutdown/Private net"));
    }
    hints.push(("Alt+r", "Refresh"));
    hints.push(("?", "Help"));
    hints.push(("q", "Quit"));
    hints
}

/// Phase plus time of the last successful refresh, e.g. "ready 12:04:31".
fn state_text(app: &App) -> String {
    let state = &app.droplets;
    let mut text = state.phase().label().to_string();
    if let Some(at) = state.last_refreshed() {
        text.push_str(&format!(" {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")));
    }
    if app.actions_in_flight > 0 {
        text.push_str(&format!(" ({} pending)", app.actions_in_flight));
    }
    text
}
