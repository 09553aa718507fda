//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{ADD_ADDRESS_SHORTCUT, SAVE_SHORTCUT, TEST_DATA_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header tabs, in display order
const NAV_ITEMS: &[View] = &[View::Welcome, View::CustomerForm];

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header with the route tabs
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Customer Form Demo ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for view in NAV_ITEMS {
        let style = if *view == app.state.current_view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(view.title(), style));
    }

    spans.push(Span::styled(
        format!("   #{}", app.state.current_view.route()),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar: feedback if any, otherwise key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(msg) => Line::from(Span::styled(
            format!(" {msg}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            format!(" {}", key_hints(app.state.current_view)),
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(view: View) -> String {
    match view {
        View::Welcome => "f/Enter: open form | q: quit | Ctrl+C: quit".to_string(),
        View::CustomerForm => format!(
            "Tab/Shift+Tab: move | Space/←/→: toggle | {SAVE_SHORTCUT}: save | {ADD_ADDRESS_SHORTCUT}: add address | {TEST_DATA_SHORTCUT}: test data | Esc: home"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_header_and_status() {
        let (header, main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 1);
        assert_eq!(status.height, 1);
        assert_eq!(main.height, 22);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_form_hints_mention_save() {
        assert!(key_hints(View::CustomerForm).contains(SAVE_SHORTCUT));
        assert!(key_hints(View::Welcome).contains("open form"));
    }
}
