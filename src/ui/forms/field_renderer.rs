//! Field rendering utilities for forms

use crate::state::FieldState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field from the domain layer.
///
/// Errors only show once the user has touched or edited the field.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    is_active: bool,
    message: Option<&str>,
) {
    let message = if field.shows_errors() { message } else { None };
    draw_field_with_value(frame, area, field.label, &field.display_value(), is_active, message);
}

/// Draw a form field with a custom display value.
/// A message marks the field invalid and is shown on the bottom border.
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    message: Option<&str>,
) {
    let accent = match (message.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(message) = message {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.block(block), area);
}
