//! Customer form rendering

use super::field_renderer::{draw_field, draw_field_with_value};
use crate::app::App;
use crate::state::{
    AddressField, Constraint, CustomerForm, ErrorKind, FieldId, FieldKind, FieldState, FocusSlot,
    FormButton, Lifecycle, Notification,
};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint as Size, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Rows taken by one bordered field
const FIELD_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 17;

const MISMATCH_MESSAGE: &str = "The confirmation does not match the email address.";

/// Draw the customer form with its buttons row
pub fn draw_customer_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.customer_form() else {
        return;
    };

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Customer Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Size::Min(FIELD_HEIGHT),     // Fields
            Size::Length(BUTTON_HEIGHT), // Buttons
            Size::Length(1),             // Validity
        ])
        .split(inner);

    draw_fields(frame, chunks[0], form);
    draw_buttons(frame, chunks[1], form);
    draw_validity(frame, chunks[2], form);
}

/// Draw the window of fields that keeps the focused one visible
fn draw_fields(frame: &mut Frame, area: Rect, form: &CustomerForm) {
    let slots: Vec<FocusSlot> = form
        .focus_slots()
        .into_iter()
        .filter(|slot| *slot != FocusSlot::Buttons)
        .collect();
    let capacity = (area.height / FIELD_HEIGHT) as usize;
    let range = visible_range(slots.len(), form.active_field_index, capacity);

    let mut constraints = vec![Size::Length(FIELD_HEIGHT); range.len()];
    constraints.push(Size::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, index) in range.enumerate() {
        let is_active = index == form.active_field_index;
        draw_slot(frame, rows[row], form, slots[index], is_active);
    }
}

fn draw_slot(frame: &mut Frame, area: Rect, form: &CustomerForm, slot: FocusSlot, is_active: bool) {
    match slot {
        FocusSlot::Field(id) => {
            let field = form.field(id);
            match (id, id.kind()) {
                (FieldId::Email, _) => {
                    let message = form.email_message();
                    let message = (!message.is_empty()).then_some(message);
                    let mut label = field.label.to_string();
                    if form.is_email_recompute_pending() {
                        label.push_str(" …");
                    }
                    draw_field_with_value(
                        frame,
                        area,
                        &label,
                        &field.display_value(),
                        is_active,
                        message,
                    );
                }
                (FieldId::ConfirmEmail, _) => {
                    let message = if field.shows_errors() {
                        describe(field)
                    } else if form.email_group().has_mismatch() {
                        Some(MISMATCH_MESSAGE.to_string())
                    } else {
                        None
                    };
                    draw_field_with_value(
                        frame,
                        area,
                        field.label,
                        &field.display_value(),
                        is_active,
                        message.as_deref(),
                    );
                }
                (_, FieldKind::Numeric) => {
                    let message = if field.shows_errors() {
                        describe(field)
                    } else {
                        None
                    };
                    draw_field_with_value(
                        frame,
                        area,
                        field.label,
                        form.rating_input(),
                        is_active,
                        message.as_deref(),
                    );
                }
                (_, FieldKind::Text) => {
                    draw_field(frame, area, field, is_active, describe(field).as_deref());
                }
                (_, FieldKind::Choice) => {
                    let value = notification_choice(form.notification());
                    draw_field_with_value(frame, area, field.label, &value, is_active, None);
                }
                (_, FieldKind::Toggle) => {
                    let value = if field.value().as_bool().unwrap_or(false) {
                        "[x] yes"
                    } else {
                        "[ ] no"
                    };
                    draw_field_with_value(frame, area, field.label, value, is_active, None);
                }
            }
        }
        FocusSlot::Address(index, field) => {
            let label = format!("Address {} · {}", index + 1, field.label());
            let value = form
                .addresses()
                .get(index)
                .map(|entry| match field {
                    AddressField::AddressType => format!("‹ {} ›", entry.address_type.label()),
                    _ => entry.display_value(field),
                })
                .unwrap_or_default();
            draw_field_with_value(frame, area, &label, &value, is_active, None);
        }
        FocusSlot::Buttons => {}
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &CustomerForm) {
    let mut constraints = vec![Size::Length(BUTTON_WIDTH); FormButton::ALL.len()];
    constraints.push(Size::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let on_buttons = form.is_buttons_row_active();
    for (i, button) in FormButton::ALL.iter().enumerate() {
        let accent = match button {
            FormButton::Save if form.is_valid() => Some(Color::Green),
            FormButton::Save => Some(Color::Yellow),
            _ => None,
        };
        let is_selected = on_buttons && form.selected_form_button() == *button;
        render_button(frame, chunks[i], button.label(), is_selected, accent);
    }
}

fn draw_validity(frame: &mut Frame, area: Rect, form: &CustomerForm) {
    let (text, color) = if form.is_valid() {
        ("Form is valid".to_string(), Color::Green)
    } else {
        (
            "Form has errors (saving is still allowed)".to_string(),
            Color::Yellow,
        )
    };
    let mut spans = vec![Span::styled(format!(" {text}"), Style::default().fg(color))];
    if form.lifecycle() == Lifecycle::Submitted {
        spans.push(Span::styled(
            format!("  · saved {}x", form.submissions()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Indices of the slots that fit, keeping `active` on screen
fn visible_range(total: usize, active: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 || total == 0 {
        return 0..0;
    }
    let active = active.min(total - 1);
    let start = (active + 1).saturating_sub(capacity);
    start..(start + capacity).min(total)
}

fn notification_choice(notification: Notification) -> String {
    let mark = |n: Notification| if n == notification { "(•)" } else { "( )" };
    format!(
        "{} {}   {} {}",
        mark(Notification::Email),
        Notification::Email.label(),
        mark(Notification::Text),
        Notification::Text.label()
    )
}

/// Human-readable text for the first error on a field
fn describe(field: &FieldState) -> Option<String> {
    let kind = *field.errors().iter().next()?;
    let limit = field
        .constraints()
        .iter()
        .find_map(|c| match (kind, c) {
            (ErrorKind::MinLength, Constraint::MinLength(n))
            | (ErrorKind::MaxLength, Constraint::MaxLength(n)) => Some(n.to_string()),
            (ErrorKind::Range, Constraint::Range { min, max }) => Some(format!("{min} and {max}")),
            _ => None,
        })
        .unwrap_or_default();

    let text = match kind {
        ErrorKind::Required => format!("Please enter your {}.", field.label.to_lowercase()),
        ErrorKind::MinLength => format!("{} must be at least {limit} characters.", field.label),
        ErrorKind::MaxLength => format!("{} must be at most {limit} characters.", field.label),
        ErrorKind::Email => "Please enter a valid email address.".to_string(),
        ErrorKind::Range => format!("Please rate your experience between {limit}."),
        ErrorKind::Match => MISMATCH_MESSAGE.to_string(),
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    mod window {
        use super::*;

        #[test]
        fn test_everything_fits() {
            assert_eq!(visible_range(5, 2, 10), 0..5);
        }

        #[test]
        fn test_scrolls_to_keep_active_visible() {
            assert_eq!(visible_range(20, 12, 5), 8..13);
        }

        #[test]
        fn test_buttons_row_shows_tail() {
            assert_eq!(visible_range(14, 14, 4), 10..14);
        }

        #[test]
        fn test_no_room() {
            assert_eq!(visible_range(14, 0, 0), 0..0);
        }
    }

    mod messages {
        use super::*;

        #[test]
        fn test_describe_valid_field_is_none() {
            let field = FieldState::text("lastName", "Last Name", "Doe", vec![Constraint::Required]);
            assert_eq!(describe(&field), None);
        }

        #[test]
        fn test_describe_required() {
            let field = FieldState::text("lastName", "Last Name", "", vec![Constraint::Required]);
            assert_eq!(describe(&field).as_deref(), Some("Please enter your last name."));
        }

        #[test]
        fn test_describe_min_length_uses_limit() {
            let field = FieldState::text(
                "firstName",
                "First Name",
                "Al",
                vec![Constraint::Required, Constraint::MinLength(3)],
            );
            assert_eq!(
                describe(&field).as_deref(),
                Some("First Name must be at least 3 characters.")
            );
        }

        #[test]
        fn test_describe_range() {
            let mut form = CustomerForm::default();
            form.active_field_index = 6;
            form.input_char('9', Instant::now()).unwrap();
            assert_eq!(
                describe(form.field(FieldId::Rating)).as_deref(),
                Some("Please rate your experience between 1 and 5.")
            );
        }

        #[test]
        fn test_notification_choice_marks_selected() {
            assert_eq!(notification_choice(Notification::Text), "( ) Email   (•) Text");
        }
    }
}
