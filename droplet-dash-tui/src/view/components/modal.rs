//! Modal dialogs

use droplet_dash_core::DropletDetails;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::event::HELP_ENTRIES;
use crate::model::App;
use crate::model::Modal;
use crate::model::state::ConfirmFocus;

/// Draw the open modal, if any.
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ConfirmDestroy {
            droplet_name,
            focus,
            ..
        } => render_confirm_destroy(frame, droplet_name, *focus),
        Modal::Details(details) => render_details(frame, details),
        Modal::Help => render_help(frame),
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clear `area`, draw the dialog frame and return the padded inner area.
fn dialog(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn render_confirm_destroy(frame: &mut Frame, droplet_name: &str, focus: ConfirmFocus) {
    let area = centered_rect(46, 9, frame.area());
    let inner = dialog(frame, area, "Destroy Droplet", Color::Red);

    let cancel_style = if focus == ConfirmFocus::Cancel {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let destroy_style = if focus == ConfirmFocus::Destroy {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            "  This permanently destroys the droplet",
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!("  \"{droplet_name}\""),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(" Cancel ", cancel_style),
            Span::raw("    "),
            Span::styled(" Destroy ", destroy_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_details(frame: &mut Frame, details: &DropletDetails) {
    let label_width = details
        .properties
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = details
        .properties
        .iter()
        .map(|(label, value)| {
            let pad = " ".repeat(label_width - label.width());
            Line::from(vec![
                Span::styled(format!("{label}{pad}  "), Style::default().fg(Color::Gray)),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled("Esc to close", Style::default().fg(Color::DarkGray)));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(72, height, frame.area());
    let inner = dialog(frame, area, &details.title, Color::Cyan);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help(frame: &mut Frame) {
    let key_width = HELP_ENTRIES
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::styled(
            "Shortcuts",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for (key, desc) in HELP_ENTRIES {
        let pad = " ".repeat(key_width - key.width());
        lines.push(Line::from(vec![
            Span::styled(format!("  {key}{pad}  "), Style::default().fg(Color::Yellow)),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Press Esc to close the help",
        Style::default().fg(Color::DarkGray),
    ));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(55, height, frame.area());
    let inner = dialog(frame, area, "Help", Color::Cyan);
    frame.render_widget(Paragraph::new(lines), inner);
}
