//! Errors for misuse of the form API
//!
//! Validation failures are not errors; they live in each field's error set.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    /// The value's shape does not fit the field (e.g. text for a checkbox).
    #[error("field {field} does not accept {value}")]
    InvalidValue { field: &'static str, value: String },

    /// Address index past the end of the list.
    #[error("address index {index} out of range (len {len})")]
    AddressIndex { index: usize, len: usize },

    /// Address type is not a free-text slot.
    #[error("address field {0} is not a text field")]
    NotTextField(&'static str),
}
