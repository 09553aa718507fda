//! Email + confirmation pair with a group-level match check

use super::constraint::{Constraint, ErrorKind};
use super::field::{FieldState, FieldValue};
use std::collections::BTreeSet;

/// Which half of the email group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailPart {
    Email,
    Confirm,
}

/// Cross-field check: the two addresses must agree once the user has
/// changed both of them. Pristine fields never trigger it.
pub fn cross_field_match(email: &FieldState, confirm: &FieldState) -> Option<ErrorKind> {
    if email.is_pristine() || confirm.is_pristine() {
        return None;
    }
    (email.value() != confirm.value()).then_some(ErrorKind::Match)
}

#[derive(Debug, Clone)]
pub struct EmailGroup {
    email: FieldState,
    confirm_email: FieldState,
    errors: BTreeSet<ErrorKind>,
}

impl EmailGroup {
    pub fn new(default_email: &str) -> Self {
        let constraints = || vec![Constraint::Required, Constraint::Email];
        let mut group = Self {
            email: FieldState::text("email", "Email", default_email, constraints()),
            confirm_email: FieldState::text("confirmEmail", "Confirm Email", "", constraints()),
            errors: BTreeSet::new(),
        };
        group.validate();
        group
    }

    pub fn email(&self) -> &FieldState {
        &self.email
    }

    pub fn confirm_email(&self) -> &FieldState {
        &self.confirm_email
    }

    /// The group-level `match` error is set
    pub fn has_mismatch(&self) -> bool {
        self.errors.contains(&ErrorKind::Match)
    }

    /// Both sub-fields and the group check pass
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.email.is_valid() && self.confirm_email.is_valid()
    }

    pub fn edit(&mut self, part: EmailPart, value: FieldValue) {
        self.part_mut(part).edit(value);
        self.validate();
    }

    pub fn patch(&mut self, part: EmailPart, value: FieldValue) {
        self.part_mut(part).patch(value);
        self.validate();
    }

    pub fn mark_touched(&mut self, part: EmailPart) {
        self.part_mut(part).mark_touched();
    }

    pub fn validate(&mut self) {
        self.errors = cross_field_match(&self.email, &self.confirm_email)
            .into_iter()
            .collect();
    }

    fn part_mut(&mut self, part: EmailPart) -> &mut FieldState {
        match part {
            EmailPart::Email => &mut self.email,
            EmailPart::Confirm => &mut self.confirm_email,
        }
    }
}
