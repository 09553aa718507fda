//! Form state management and the customer form

use super::address::{AddressField, AddressList, AddressType};
use super::constraint::Constraint;
use super::email_group::{EmailGroup, EmailPart};
use super::error::FormError;
use super::field::{FieldState, FieldValue};
use super::reactive::{phone_constraints, ReactiveController, EMAIL_DEBOUNCE};
use super::value::{CustomerValue, EmailGroupValue};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Placeholder address the email field starts with
pub const DEFAULT_EMAIL: &str = "joe@doe.com";

const TEST_FIRST_NAME: &str = "Jamal";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Channel used to notify the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notification {
    #[default]
    Email,
    Text,
}

impl Notification {
    /// Anything other than `"text"` means email
    pub fn from_value(value: &FieldValue) -> Self {
        match value.as_str() {
            Some("text") => Self::Text,
            _ => Self::Email,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Text => "text",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Email => Self::Text,
            Self::Text => Self::Email,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Text => "Text",
        }
    }
}

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
    Choice,
    Toggle,
}

/// Top-level fields of the customer form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    ConfirmEmail,
    Phone,
    Notification,
    Rating,
    SendCatalog,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::ConfirmEmail,
        FieldId::Phone,
        FieldId::Notification,
        FieldId::Rating,
        FieldId::SendCatalog,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::ConfirmEmail => "confirmEmail",
            Self::Phone => "phone",
            Self::Notification => "notification",
            Self::Rating => "rating",
            Self::SendCatalog => "sendCatalog",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Rating => FieldKind::Numeric,
            Self::Notification => FieldKind::Choice,
            Self::SendCatalog => FieldKind::Toggle,
            _ => FieldKind::Text,
        }
    }

    /// Whether a value has the right shape for this field
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self.kind() {
            FieldKind::Text => matches!(value, FieldValue::Text(_)),
            FieldKind::Numeric => !matches!(value, FieldValue::Bool(_)),
            FieldKind::Choice => matches!(value.as_str(), Some("email" | "text")),
            FieldKind::Toggle => matches!(value, FieldValue::Bool(_)),
        }
    }

    fn email_part(&self) -> Option<EmailPart> {
        match self {
            Self::Email => Some(EmailPart::Email),
            Self::ConfirmEmail => Some(EmailPart::Confirm),
            _ => None,
        }
    }
}

/// Something that can hold focus on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    Field(FieldId),
    Address(usize, AddressField),
    Buttons,
}

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Save,
    AddAddress,
    TestData,
}

impl FormButton {
    pub const ALL: [FormButton; 3] = [FormButton::Save, FormButton::AddAddress, FormButton::TestData];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::AddAddress => "Add Address",
            Self::TestData => "Test Data",
        }
    }
}

/// Lifecycle of the form model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Built,
    Submitted,
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Customer(CustomerForm),
}

impl FormState {
    /// Build a fresh customer form, replacing whatever was there
    pub fn build(&mut self, email_delay: Duration) {
        *self = FormState::Customer(CustomerForm::build(email_delay));
    }

    /// Discard the form and any pending recomputation
    pub fn teardown(&mut self) {
        if let FormState::Customer(form) = self {
            form.teardown();
        }
        *self = FormState::None;
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            FormState::None => Lifecycle::Uninitialized,
            FormState::Customer(f) => f.lifecycle(),
        }
    }

    pub fn customer(&self) -> Option<&CustomerForm> {
        match self {
            FormState::None => None,
            FormState::Customer(f) => Some(f),
        }
    }

    pub fn customer_mut(&mut self) -> Option<&mut CustomerForm> {
        match self {
            FormState::None => None,
            FormState::Customer(f) => Some(f),
        }
    }

    pub fn next_field(&mut self) {
        if let FormState::Customer(f) = self {
            f.next_field();
        }
    }

    pub fn prev_field(&mut self) {
        if let FormState::Customer(f) = self {
            f.prev_field();
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            FormState::None => false,
            FormState::Customer(f) => f.tick(now),
        }
    }
}

/// Customer data entry form.
///
/// All mutation goes through methods on this type so that every field's
/// error set, the email group check and the phone constraints stay in step
/// with the current values.
#[derive(Debug, Clone)]
pub struct CustomerForm {
    first_name: FieldState,
    last_name: FieldState,
    email_group: EmailGroup,
    phone: FieldState,
    notification: FieldState,
    rating: FieldState,
    send_catalog: FieldState,
    addresses: AddressList,
    /// Edit buffer behind `rating`; the value is parsed from it
    rating_input: String,
    reactive: ReactiveController,
    submissions: u32,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: usize,
}

impl CustomerForm {
    pub fn build(email_delay: Duration) -> Self {
        let mut form = Self {
            first_name: FieldState::text(
                "firstName",
                "First Name",
                "",
                vec![Constraint::Required, Constraint::MinLength(3)],
            ),
            last_name: FieldState::text(
                "lastName",
                "Last Name",
                "",
                vec![Constraint::Required, Constraint::MaxLength(50)],
            ),
            email_group: EmailGroup::new(DEFAULT_EMAIL),
            phone: FieldState::text("phone", "Phone", "", Vec::new()),
            notification: FieldState::text(
                "notification",
                "Send Notifications",
                Notification::Email.as_str(),
                Vec::new(),
            ),
            rating: FieldState::new(
                "rating",
                "Rating (1-5)",
                FieldValue::Null,
                vec![Constraint::Range { min: 1.0, max: 5.0 }],
            ),
            send_catalog: FieldState::new(
                "sendCatalog",
                "Send me your catalog",
                FieldValue::Bool(true),
                Vec::new(),
            ),
            addresses: AddressList::new(),
            rating_input: String::new(),
            reactive: ReactiveController::new(email_delay),
            submissions: 0,
            active_field_index: 0,
            selected_button: 0,
        };
        form.apply_notification();
        tracing::debug!(?email_delay, "customer form built");
        form
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.submissions > 0 {
            Lifecycle::Submitted
        } else {
            Lifecycle::Built
        }
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => self.email_group.email(),
            FieldId::ConfirmEmail => self.email_group.confirm_email(),
            FieldId::Phone => &self.phone,
            FieldId::Notification => &self.notification,
            FieldId::Rating => &self.rating,
            FieldId::SendCatalog => &self.send_catalog,
        }
    }

    pub fn email_group(&self) -> &EmailGroup {
        &self.email_group
    }

    pub fn addresses(&self) -> &AddressList {
        &self.addresses
    }

    pub fn notification(&self) -> Notification {
        Notification::from_value(self.notification.value())
    }

    pub fn email_message(&self) -> &str {
        self.reactive.email_message()
    }

    /// Raw text typed into the rating field
    pub fn rating_input(&self) -> &str {
        &self.rating_input
    }

    pub fn is_email_recompute_pending(&self) -> bool {
        self.reactive.is_email_recompute_pending()
    }

    /// No field or group currently carries an error
    pub fn is_valid(&self) -> bool {
        self.email_group.is_valid()
            && [
                &self.first_name,
                &self.last_name,
                &self.phone,
                &self.notification,
                &self.rating,
                &self.send_catalog,
            ]
            .iter()
            .all(|f| f.is_valid())
    }

    /// User edit of a field at `now` (drives the email debounce)
    pub fn edit_at(&mut self, id: FieldId, value: FieldValue, now: Instant) -> Result<(), FormError> {
        Self::check_value(id, &value)?;
        self.apply(id, value, true, now);
        Ok(())
    }

    /// Programmatic update: the field stays pristine
    pub fn patch(&mut self, id: FieldId, value: FieldValue) -> Result<(), FormError> {
        Self::check_value(id, &value)?;
        self.apply(id, value, false, Instant::now());
        Ok(())
    }

    /// Focus left the field
    pub fn blur(&mut self, id: FieldId) {
        match id.email_part() {
            Some(part) => self.email_group.mark_touched(part),
            None => {
                if let Some(field) = self.plain_field_mut(id) {
                    field.mark_touched();
                }
            }
        }
    }

    /// Flip a choice or checkbox field
    pub fn toggle(&mut self, id: FieldId, now: Instant) -> Result<(), FormError> {
        let value = match id {
            FieldId::Notification => FieldValue::text(self.notification().toggle().as_str()),
            FieldId::SendCatalog => {
                FieldValue::Bool(!self.send_catalog.value().as_bool().unwrap_or(false))
            }
            _ => return Ok(()),
        };
        self.edit_at(id, value, now)
    }

    /// Append a blank home address
    pub fn add_address(&mut self) -> usize {
        let on_buttons = self.active_slot() == FocusSlot::Buttons;
        let index = self.addresses.push_default();
        if on_buttons {
            self.active_field_index = self.field_count() - 1;
        }
        tracing::debug!(count = self.addresses.len(), "address added");
        index
    }

    pub fn edit_address(
        &mut self,
        index: usize,
        field: AddressField,
        text: &str,
    ) -> Result<(), FormError> {
        let len = self.addresses.len();
        let entry = self
            .addresses
            .get_mut(index)
            .ok_or(FormError::AddressIndex { index, len })?;
        let slot = entry
            .text_mut(field)
            .ok_or(FormError::NotTextField(field.label()))?;
        *slot = text.to_string();
        Ok(())
    }

    pub fn set_address_type(&mut self, index: usize, address_type: AddressType) -> Result<(), FormError> {
        let len = self.addresses.len();
        let entry = self
            .addresses
            .get_mut(index)
            .ok_or(FormError::AddressIndex { index, len })?;
        entry.address_type = address_type;
        Ok(())
    }

    /// Fill in sample data without marking anything dirty
    pub fn populate_test_data(&mut self) -> Result<(), FormError> {
        self.patch(FieldId::FirstName, FieldValue::text(TEST_FIRST_NAME))
    }

    /// Advance timers; returns true if derived state was recomputed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.reactive.tick(now, self.email_group.email())
    }

    pub fn teardown(&mut self) {
        self.reactive.cancel();
        tracing::debug!("customer form torn down");
    }

    /// Current value in submission shape
    pub fn value(&self) -> CustomerValue {
        CustomerValue {
            first_name: self.first_name.value().as_text().to_string(),
            last_name: self.last_name.value().as_text().to_string(),
            email_group: EmailGroupValue {
                email: self.email_group.email().value().as_text().to_string(),
                confirm_email: self.email_group.confirm_email().value().as_text().to_string(),
            },
            phone: self.phone.value().as_text().to_string(),
            notification: self.notification(),
            rating: self.rating.value().clone(),
            send_catalog: self.send_catalog.value().as_bool().unwrap_or(false),
            addresses: self.addresses.to_vec(),
        }
    }

    /// Snapshot the value for submission. Invalid forms are submitted too;
    /// the form stays editable afterwards.
    pub fn submit(&mut self) -> CustomerValue {
        self.submissions += 1;
        self.value()
    }

    /// Focus order: top-level fields, each address, then the buttons row
    pub fn focus_slots(&self) -> Vec<FocusSlot> {
        let mut slots: Vec<FocusSlot> = FieldId::ALL.into_iter().map(FocusSlot::Field).collect();
        for index in 0..self.addresses.len() {
            slots.extend(
                AddressField::ALL
                    .into_iter()
                    .map(|field| FocusSlot::Address(index, field)),
            );
        }
        slots.push(FocusSlot::Buttons);
        slots
    }

    pub fn slot_at(&self, index: usize) -> FocusSlot {
        let fields = FieldId::ALL.len();
        let address_slots = self.addresses.len() * AddressField::ALL.len();
        if index < fields {
            FocusSlot::Field(FieldId::ALL[index])
        } else if index < fields + address_slots {
            let offset = index - fields;
            FocusSlot::Address(
                offset / AddressField::ALL.len(),
                AddressField::ALL[offset % AddressField::ALL.len()],
            )
        } else {
            FocusSlot::Buttons
        }
    }

    pub fn active_slot(&self) -> FocusSlot {
        self.slot_at(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_slot() == FocusSlot::Buttons
    }

    pub fn selected_form_button(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Type a character into the focused slot
    pub fn input_char(&mut self, c: char, now: Instant) -> Result<(), FormError> {
        match self.active_slot() {
            FocusSlot::Field(id) => match id.kind() {
                FieldKind::Text => {
                    let mut text = self.field(id).value().as_text().to_string();
                    text.push(c);
                    self.edit_at(id, FieldValue::Text(text), now)
                }
                FieldKind::Numeric => {
                    let mut raw = self.rating_input.clone();
                    raw.push(c);
                    self.edit_rating_input(raw, now)
                }
                FieldKind::Choice | FieldKind::Toggle if c == ' ' => self.toggle(id, now),
                FieldKind::Choice | FieldKind::Toggle => Ok(()),
            },
            FocusSlot::Address(index, AddressField::AddressType) if c == ' ' => {
                self.cycle_address_type(index, true)
            }
            FocusSlot::Address(_, AddressField::AddressType) => Ok(()),
            FocusSlot::Address(index, field) => {
                let mut text = self.address_text(index, field)?;
                text.push(c);
                self.edit_address(index, field, &text)
            }
            FocusSlot::Buttons => Ok(()),
        }
    }

    /// Remove the last character from the focused slot.
    /// Nothing changes (and nothing turns dirty) when it is already empty.
    pub fn backspace(&mut self, now: Instant) -> Result<(), FormError> {
        match self.active_slot() {
            FocusSlot::Field(id) => match id.kind() {
                FieldKind::Text => {
                    let mut text = self.field(id).value().as_text().to_string();
                    if text.pop().is_none() {
                        return Ok(());
                    }
                    self.edit_at(id, FieldValue::Text(text), now)
                }
                FieldKind::Numeric => {
                    let mut raw = self.rating_input.clone();
                    if raw.pop().is_none() {
                        return Ok(());
                    }
                    self.edit_rating_input(raw, now)
                }
                FieldKind::Choice | FieldKind::Toggle => Ok(()),
            },
            FocusSlot::Address(_, AddressField::AddressType) => Ok(()),
            FocusSlot::Address(index, field) => {
                let mut text = self.address_text(index, field)?;
                if text.pop().is_none() {
                    return Ok(());
                }
                self.edit_address(index, field, &text)
            }
            FocusSlot::Buttons => Ok(()),
        }
    }

    /// Left/right on the focused slot: flips choices, cycles address types
    pub fn cycle(&mut self, forward: bool, now: Instant) -> Result<(), FormError> {
        match self.active_slot() {
            FocusSlot::Field(id) if matches!(id.kind(), FieldKind::Choice | FieldKind::Toggle) => {
                self.toggle(id, now)
            }
            FocusSlot::Address(index, AddressField::AddressType) => {
                self.cycle_address_type(index, forward)
            }
            FocusSlot::Buttons if forward => {
                self.next_button();
                Ok(())
            }
            FocusSlot::Buttons => {
                self.prev_button();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn edit_rating_input(&mut self, raw: String, now: Instant) -> Result<(), FormError> {
        self.edit_at(FieldId::Rating, FieldValue::numeric_input(&raw), now)?;
        self.rating_input = raw;
        Ok(())
    }

    fn address_text(&self, index: usize, field: AddressField) -> Result<String, FormError> {
        let entry = self.addresses.get(index).ok_or(FormError::AddressIndex {
            index,
            len: self.addresses.len(),
        })?;
        entry
            .text(field)
            .map(str::to_string)
            .ok_or(FormError::NotTextField(field.label()))
    }

    fn cycle_address_type(&mut self, index: usize, forward: bool) -> Result<(), FormError> {
        let current = self
            .addresses
            .get(index)
            .map(|entry| entry.address_type)
            .ok_or(FormError::AddressIndex {
                index,
                len: self.addresses.len(),
            })?;
        let next = if forward { current.next() } else { current.prev() };
        self.set_address_type(index, next)
    }

    fn check_value(id: FieldId, value: &FieldValue) -> Result<(), FormError> {
        if id.accepts(value) {
            Ok(())
        } else {
            Err(FormError::InvalidValue {
                field: id.name(),
                value: format!("{value:?}"),
            })
        }
    }

    fn plain_field_mut(&mut self, id: FieldId) -> Option<&mut FieldState> {
        match id {
            FieldId::FirstName => Some(&mut self.first_name),
            FieldId::LastName => Some(&mut self.last_name),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Notification => Some(&mut self.notification),
            FieldId::Rating => Some(&mut self.rating),
            FieldId::SendCatalog => Some(&mut self.send_catalog),
            FieldId::Email | FieldId::ConfirmEmail => None,
        }
    }

    fn apply(&mut self, id: FieldId, value: FieldValue, user_edit: bool, now: Instant) {
        if id == FieldId::Rating {
            self.rating_input = value.display_value();
        }
        match id.email_part() {
            Some(part) if user_edit => self.email_group.edit(part, value),
            Some(part) => self.email_group.patch(part, value),
            None => {
                if let Some(field) = self.plain_field_mut(id) {
                    if user_edit {
                        field.edit(value);
                    } else {
                        field.patch(value);
                    }
                }
            }
        }
        self.on_changed(id, now);
    }

    fn on_changed(&mut self, id: FieldId, now: Instant) {
        match id {
            FieldId::Notification => self.apply_notification(),
            FieldId::Email => self.reactive.email_edited(now),
            _ => {}
        }
    }

    fn apply_notification(&mut self) {
        let notification = self.notification();
        self.phone.set_constraints(phone_constraints(notification));
        tracing::debug!(
            notification = notification.as_str(),
            phone_required = !self.phone.constraints().is_empty(),
            "phone constraints updated"
        );
    }
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self::build(EMAIL_DEBOUNCE)
    }
}

impl Form for CustomerForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + self.addresses.len() * AddressField::ALL.len() + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        if let FocusSlot::Field(id) = self.active_slot() {
            self.blur(id);
        }
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
