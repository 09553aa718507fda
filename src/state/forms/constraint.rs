//! Field constraints and their evaluation
//!
//! Evaluation is pure: the same value and constraint list always produce the
//! same error set.

use super::field::FieldValue;
use std::collections::BTreeSet;
use std::fmt;

/// Why a field currently fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Required,
    MinLength,
    MaxLength,
    Email,
    Range,
    Match,
}

impl ErrorKind {
    /// Stable key used in logs and messages
    pub fn key(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::Email => "email",
            Self::Range => "range",
            Self::Match => "match",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named predicate over a single field value
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    /// Inclusive numeric range; null values are skipped
    Range { min: f64, max: f64 },
}

impl Constraint {
    /// Check a value, returning the error it produces (if any)
    pub fn check(&self, value: &FieldValue) -> Option<ErrorKind> {
        match self {
            Constraint::Required => value.is_empty().then_some(ErrorKind::Required),
            Constraint::MinLength(min) => value
                .as_str()
                .filter(|s| s.chars().count() < *min)
                .map(|_| ErrorKind::MinLength),
            Constraint::MaxLength(max) => value
                .as_str()
                .filter(|s| s.chars().count() > *max)
                .map(|_| ErrorKind::MaxLength),
            Constraint::Email => value
                .as_str()
                .filter(|s| !s.is_empty() && !is_email_shaped(s))
                .map(|_| ErrorKind::Email),
            Constraint::Range { min, max } => {
                let number = match value {
                    FieldValue::Null => return None,
                    FieldValue::Number(n) => Some(*n),
                    FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
                    FieldValue::Bool(_) => None,
                };
                match number {
                    Some(n) if !n.is_nan() && n >= *min && n <= *max => None,
                    _ => Some(ErrorKind::Range),
                }
            }
        }
    }
}

/// Evaluate every attached constraint against a value
pub fn evaluate(value: &FieldValue, constraints: &[Constraint]) -> BTreeSet<ErrorKind> {
    constraints.iter().filter_map(|c| c.check(value)).collect()
}

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;

/// Standard email shape: `local@label(.label)*`
pub fn is_email_shaped(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > MAX_LOCAL_PART_LENGTH || !local.chars().all(is_atext) {
        return false;
    }
    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-.".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LENGTH
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    mod required {
        use super::*;

        #[test]
        fn test_fails_on_null_and_empty() {
            assert_eq!(
                Constraint::Required.check(&FieldValue::Null),
                Some(ErrorKind::Required)
            );
            assert_eq!(
                Constraint::Required.check(&FieldValue::text("")),
                Some(ErrorKind::Required)
            );
        }

        #[test]
        fn test_passes_on_values() {
            assert_eq!(Constraint::Required.check(&FieldValue::text("x")), None);
            assert_eq!(Constraint::Required.check(&FieldValue::Bool(false)), None);
        }
    }

    mod length {
        use super::*;

        #[test]
        fn test_min_length_flags_every_short_string() {
            for s in ["", "a", "ab", "éé"] {
                let errors = evaluate(&FieldValue::text(s), &[Constraint::MinLength(3)]);
                assert!(errors.contains(&ErrorKind::MinLength), "{s:?}");
            }
        }

        #[test]
        fn test_min_length_passes_at_bound() {
            let errors = evaluate(&FieldValue::text("abc"), &[Constraint::MinLength(3)]);
            assert!(errors.is_empty());
        }

        #[test]
        fn test_max_length() {
            let long = "x".repeat(51);
            assert_eq!(
                Constraint::MaxLength(50).check(&FieldValue::text(long)),
                Some(ErrorKind::MaxLength)
            );
            let exact = "x".repeat(50);
            assert_eq!(Constraint::MaxLength(50).check(&FieldValue::text(exact)), None);
        }

        #[test]
        fn test_length_skips_non_strings() {
            assert_eq!(Constraint::MinLength(3).check(&FieldValue::Null), None);
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_common_shapes() {
            for s in ["joe@doe.com", "a@b", "first.last+tag@mail.example.org"] {
                assert!(is_email_shaped(s), "{s}");
            }
        }

        #[test]
        fn test_rejects_bad_shapes() {
            for s in ["joe", "joe@", "@doe.com", "joe@doe..com", "joe@-doe.com", "jo e@doe.com"] {
                assert!(!is_email_shaped(s), "{s}");
            }
        }

        #[test]
        fn test_empty_value_left_to_required() {
            assert_eq!(Constraint::Email.check(&FieldValue::text("")), None);
        }

        #[test]
        fn test_flags_invalid_value() {
            assert_eq!(
                Constraint::Email.check(&FieldValue::text("nope")),
                Some(ErrorKind::Email)
            );
        }
    }

    mod range {
        use super::*;

        fn range() -> Constraint {
            Constraint::Range { min: 1.0, max: 5.0 }
        }

        #[test]
        fn test_null_is_never_flagged() {
            assert_eq!(range().check(&FieldValue::Null), None);
        }

        #[test]
        fn test_inclusive_bounds() {
            for n in [1.0, 3.0, 5.0] {
                assert_eq!(range().check(&FieldValue::Number(n)), None);
            }
            for n in [0.0, 0.99, 5.01, -3.0, f64::INFINITY, f64::NAN] {
                assert_eq!(range().check(&FieldValue::Number(n)), Some(ErrorKind::Range));
            }
        }

        #[test]
        fn test_non_numeric_is_flagged() {
            assert_eq!(range().check(&FieldValue::text("abc")), Some(ErrorKind::Range));
            assert_eq!(range().check(&FieldValue::Bool(true)), Some(ErrorKind::Range));
        }

        #[test]
        fn test_numeric_text_is_checked_as_number() {
            assert_eq!(range().check(&FieldValue::text("4")), None);
            assert_eq!(range().check(&FieldValue::text("9")), Some(ErrorKind::Range));
        }
    }

    #[test]
    fn test_evaluate_collects_all_failures() {
        let errors = evaluate(
            &FieldValue::text(""),
            &[Constraint::Required, Constraint::MinLength(3)],
        );
        assert_eq!(
            errors.into_iter().collect::<Vec<_>>(),
            vec![ErrorKind::Required, ErrorKind::MinLength]
        );
    }

    #[test]
    fn test_evaluate_is_pure() {
        let constraints = [Constraint::Required, Constraint::Email];
        let value = FieldValue::text("x@");
        assert_eq!(evaluate(&value, &constraints), evaluate(&value, &constraints));
    }

    #[test]
    fn test_error_kind_keys() {
        assert_eq!(ErrorKind::MinLength.to_string(), "minlength");
        assert_eq!(ErrorKind::Match.key(), "match");
    }
}
