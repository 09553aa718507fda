//! Derived state that follows field changes
//!
//! Phone required-ness is a pure function of the notification channel.
//! The email message is recomputed behind a debounce so a burst of
//! keystrokes produces a single update.

use super::constraint::{Constraint, ErrorKind};
use super::debounce::Debouncer;
use super::field::FieldState;
use super::form_state::Notification;
use std::time::{Duration, Instant};

/// Quiet period before the email message catches up with edits
pub const EMAIL_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Constraints attached to the phone field for a notification channel
pub fn phone_constraints(notification: Notification) -> Vec<Constraint> {
    match notification {
        Notification::Text => vec![Constraint::Required],
        Notification::Email => Vec::new(),
    }
}

fn email_error_text(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::Required => Some("Please enter your email address"),
        ErrorKind::Email => Some("Please enter a valid email address"),
        _ => None,
    }
}

/// User-facing message for the email field.
///
/// Empty until the field has been touched or edited.
pub fn email_message(field: &FieldState) -> String {
    if !(field.is_touched() || field.is_dirty()) {
        return String::new();
    }
    field
        .errors()
        .iter()
        .filter_map(|kind| email_error_text(*kind))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone)]
pub struct ReactiveController {
    email_debounce: Debouncer,
    email_message: String,
}

impl ReactiveController {
    pub fn new(email_delay: Duration) -> Self {
        Self {
            email_debounce: Debouncer::new(email_delay),
            email_message: String::new(),
        }
    }

    pub fn email_message(&self) -> &str {
        &self.email_message
    }

    pub fn is_email_recompute_pending(&self) -> bool {
        self.email_debounce.is_pending()
    }

    pub fn email_edited(&mut self, now: Instant) {
        self.email_debounce.schedule(now);
    }

    /// Run any recomputation whose quiet period has elapsed.
    /// Returns true when the email message was recomputed.
    pub fn tick(&mut self, now: Instant, email: &FieldState) -> bool {
        if !self.email_debounce.poll(now) {
            return false;
        }
        self.email_message = email_message(email);
        tracing::trace!(message = %self.email_message, "email message recomputed");
        true
    }

    /// Drop pending work when the form goes away
    pub fn cancel(&mut self) {
        self.email_debounce.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldValue;

    fn email_field(value: &str) -> FieldState {
        FieldState::text(
            "email",
            "Email",
            value,
            vec![Constraint::Required, Constraint::Email],
        )
    }

    mod phone {
        use super::*;

        #[test]
        fn test_text_requires_phone() {
            assert_eq!(phone_constraints(Notification::Text), vec![Constraint::Required]);
        }

        #[test]
        fn test_email_clears_phone_constraints() {
            assert!(phone_constraints(Notification::Email).is_empty());
        }
    }

    mod message {
        use super::*;

        #[test]
        fn test_pristine_untouched_field_has_no_message() {
            let field = email_field("");
            assert_eq!(email_message(&field), "");
        }

        #[test]
        fn test_required_message() {
            let mut field = email_field("joe@doe.com");
            field.edit(FieldValue::text(""));
            assert_eq!(email_message(&field), "Please enter your email address");
        }

        #[test]
        fn test_invalid_email_message() {
            let mut field = email_field("joe@doe.com");
            field.edit(FieldValue::text("joe"));
            assert_eq!(email_message(&field), "Please enter a valid email address");
        }

        #[test]
        fn test_touched_field_reports_errors() {
            let mut field = email_field("");
            field.mark_touched();
            assert_eq!(email_message(&field), "Please enter your email address");
        }

        #[test]
        fn test_valid_field_clears_message() {
            let mut field = email_field("");
            field.edit(FieldValue::text("a@b.com"));
            assert_eq!(email_message(&field), "");
        }
    }

    mod controller {
        use super::*;

        #[test]
        fn test_tick_without_edit_does_nothing() {
            let mut controller = ReactiveController::new(EMAIL_DEBOUNCE);
            let field = email_field("");
            assert!(!controller.tick(Instant::now(), &field));
        }

        #[test]
        fn test_message_updates_only_after_quiet_period() {
            let start = Instant::now();
            let mut controller = ReactiveController::new(EMAIL_DEBOUNCE);
            let mut field = email_field("joe@doe.com");

            field.edit(FieldValue::text("joe"));
            controller.email_edited(start);
            assert!(!controller.tick(start + Duration::from_millis(500), &field));
            assert_eq!(controller.email_message(), "");

            assert!(controller.tick(start + EMAIL_DEBOUNCE, &field));
            assert_eq!(controller.email_message(), "Please enter a valid email address");
        }

        #[test]
        fn test_recompute_is_idempotent() {
            let start = Instant::now();
            let mut controller = ReactiveController::new(EMAIL_DEBOUNCE);
            let mut field = email_field("joe@doe.com");
            field.edit(FieldValue::text(""));

            controller.email_edited(start);
            controller.tick(start + EMAIL_DEBOUNCE, &field);
            let first = controller.email_message().to_string();

            controller.email_edited(start + EMAIL_DEBOUNCE);
            controller.tick(start + EMAIL_DEBOUNCE * 2, &field);
            assert_eq!(controller.email_message(), first);
        }

        #[test]
        fn test_cancel_drops_pending_recompute() {
            let start = Instant::now();
            let mut controller = ReactiveController::new(EMAIL_DEBOUNCE);
            let field = email_field("");
            controller.email_edited(start);
            controller.cancel();
            assert!(!controller.is_email_recompute_pending());
            assert!(!controller.tick(start + EMAIL_DEBOUNCE * 2, &field));
        }
    }
}
