//! Welcome page

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WELCOME_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the text vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(WELCOME_HEIGHT),
            Constraint::Min(0),
        ])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(
            "Customer Form Demo",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Sign up a customer with a form that checks itself as you type:"),
        Line::from("required fields, email confirmation, a phone number that becomes"),
        Line::from("required for text notifications, and as many addresses as you need."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("f", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" to open the form, "),
            Span::styled("q", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" to quit."),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[1],
    );
}
