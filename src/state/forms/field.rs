//! Form field value objects

use super::constraint::{evaluate, Constraint, ErrorKind};
use serde::Serialize;
use std::collections::BTreeSet;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Interpret raw keyboard input for a numeric field.
    ///
    /// Empty input means "not entered yet" and maps to `Null`. Input that
    /// does not parse to a finite number is kept verbatim so the range check
    /// can report it and the snapshot does not lose it.
    pub fn numeric_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Null;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => FieldValue::Number(n),
            _ => FieldValue::Text(raw.to_string()),
        }
    }

    /// Get the text value (returns empty string for non-text values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Null and empty strings count as "no value"
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) | FieldValue::Bool(_) => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(true) => "yes".to_string(),
            FieldValue::Bool(false) => "no".to_string(),
        }
    }
}

/// A single form field: its value, interaction flags, attached constraints
/// and the errors those constraints currently produce.
///
/// The error set is recomputed on every value or constraint change, so it
/// never outlives the state it was computed from.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub name: &'static str,
    pub label: &'static str,
    value: FieldValue,
    touched: bool,
    dirty: bool,
    errors: BTreeSet<ErrorKind>,
    constraints: Vec<Constraint>,
}

impl FieldState {
    pub fn new(
        name: &'static str,
        label: &'static str,
        value: FieldValue,
        constraints: Vec<Constraint>,
    ) -> Self {
        let mut field = Self {
            name,
            label,
            value,
            touched: false,
            dirty: false,
            errors: BTreeSet::new(),
            constraints,
        };
        field.validate();
        field
    }

    /// Create a new text field with initial value
    pub fn text(
        name: &'static str,
        label: &'static str,
        value: &str,
        constraints: Vec<Constraint>,
    ) -> Self {
        Self::new(name, label, FieldValue::text(value), constraints)
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn errors(&self) -> &BTreeSet<ErrorKind> {
        &self.errors
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }


    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// A field is pristine until the user changes its value
    pub fn is_pristine(&self) -> bool {
        !self.dirty
    }

    /// Errors are only surfaced once the user has interacted with the field
    pub fn shows_errors(&self) -> bool {
        (self.touched || self.dirty) && !self.errors.is_empty()
    }

    /// User edit: replaces the value and marks the field dirty
    pub fn edit(&mut self, value: FieldValue) {
        self.value = value;
        self.dirty = true;
        self.validate();
    }

    /// Programmatic patch: replaces the value without marking it dirty
    pub fn patch(&mut self, value: FieldValue) {
        self.value = value;
        self.validate();
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    /// Replace the attached constraints and re-evaluate
    pub fn set_constraints(&mut self, constraints: Vec<Constraint>) {
        self.constraints = constraints;
        self.validate();
    }

    pub fn validate(&mut self) {
        self.errors = evaluate(&self.value, &self.constraints);
    }

    pub fn display_value(&self) -> String {
        self.value.display_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_value {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_numeric_input_empty_is_null() {
            assert_eq!(FieldValue::numeric_input(""), FieldValue::Null);
            assert_eq!(FieldValue::numeric_input("  "), FieldValue::Null);
        }

        #[test]
        fn test_numeric_input_parses_numbers() {
            assert_eq!(FieldValue::numeric_input("4"), FieldValue::Number(4.0));
            assert_eq!(FieldValue::numeric_input("2.5"), FieldValue::Number(2.5));
        }

        #[test]
        fn test_numeric_input_keeps_garbage_as_text() {
            assert_eq!(FieldValue::numeric_input("4x"), FieldValue::text("4x"));
        }

        #[test]
        fn test_numeric_input_keeps_non_finite_as_text() {
            for raw in ["inf", "NaN", "1e999"] {
                assert_eq!(FieldValue::numeric_input(raw), FieldValue::text(raw));
            }
        }

        #[test]
        fn test_non_finite_input_survives_serialization() {
            let json = serde_json::to_string(&FieldValue::numeric_input("inf")).unwrap();
            assert_eq!(json, r#""inf""#);
        }

        #[test]
        fn test_is_empty() {
            assert!(FieldValue::Null.is_empty());
            assert!(FieldValue::text("").is_empty());
            assert!(!FieldValue::text("a").is_empty());
            assert!(!FieldValue::Number(0.0).is_empty());
            assert!(!FieldValue::Bool(false).is_empty());
        }

        #[test]
        fn test_display_value() {
            assert_eq!(FieldValue::Null.display_value(), "");
            assert_eq!(FieldValue::Number(3.0).display_value(), "3");
            assert_eq!(FieldValue::Number(3.5).display_value(), "3.5");
            assert_eq!(FieldValue::Number(1e20).display_value(), "100000000000000000000");
            assert_eq!(FieldValue::Bool(true).display_value(), "yes");
        }

        #[test]
        fn test_serializes_untagged() {
            let values = vec![
                FieldValue::Null,
                FieldValue::text("a"),
                FieldValue::Number(2.0),
                FieldValue::Bool(true),
            ];
            let json = serde_json::to_string(&values).unwrap();
            assert_eq!(json, r#"[null,"a",2.0,true]"#);
        }
    }

    mod field_state {
        use super::*;

        fn first_name() -> FieldState {
            FieldState::text(
                "firstName",
                "First Name",
                "",
                vec![Constraint::Required, Constraint::MinLength(3)],
            )
        }

        #[test]
        fn test_new_field_is_pristine_and_untouched() {
            let field = first_name();
            assert!(field.is_pristine());
            assert!(!field.is_touched());
            assert!(!field.shows_errors());
        }

        #[test]
        fn test_new_field_is_validated_immediately() {
            let field = first_name();
            assert!(field.errors().contains(&ErrorKind::Required));
        }

        #[test]
        fn test_edit_marks_dirty_and_revalidates() {
            let mut field = first_name();
            field.edit(FieldValue::text("Jo"));
            assert!(field.is_dirty());
            assert!(!field.errors().contains(&ErrorKind::Required));
            assert!(field.errors().contains(&ErrorKind::MinLength));
            assert!(field.shows_errors());
        }

        #[test]
        fn test_no_stale_errors_after_edit() {
            let mut field = first_name();
            field.edit(FieldValue::text("Jamal"));
            assert!(field.is_valid());
        }

        #[test]
        fn test_patch_does_not_mark_dirty() {
            let mut field = first_name();
            field.patch(FieldValue::text("Jamal"));
            assert!(field.is_pristine());
            assert!(field.is_valid());
        }

        #[test]
        fn test_touched_surfaces_errors() {
            let mut field = first_name();
            field.mark_touched();
            assert!(field.shows_errors());
        }

        #[test]
        fn test_set_constraints_revalidates() {
            let mut field = FieldState::text("phone", "Phone", "", vec![]);
            assert!(field.is_valid());
            field.set_constraints(vec![Constraint::Required]);
            assert!(field.errors().contains(&ErrorKind::Required));
            field.set_constraints(vec![]);
            assert!(field.is_valid());
        }
    }
}
