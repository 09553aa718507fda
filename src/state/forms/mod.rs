//! Form domain layer
//!
//! Field constraints, the email group check, the phone rule that follows the
//! notification channel, the debounced email message and the address list.
//! The UI reads this state; all changes go through [`CustomerForm`].

mod address;
mod constraint;
mod debounce;
mod email_group;
mod error;
mod field;
mod form_state;
mod reactive;
mod value;

pub use address::AddressField;
pub use constraint::{Constraint, ErrorKind};
pub use error::FormError;
pub use field::FieldState;
pub use form_state::{
    CustomerForm, FieldId, FieldKind, FocusSlot, Form, FormButton, FormState, Lifecycle,
    Notification,
};
pub use reactive::EMAIL_DEBOUNCE;
pub use value::CustomerValue;
