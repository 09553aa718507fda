//! Serializable snapshot of the form value

use super::address::AddressEntry;
use super::field::FieldValue;
use super::form_state::Notification;
use serde::Serialize;

/// Value of the email group as submitted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailGroupValue {
    pub email: String,
    pub confirm_email: String,
}

/// Complete form value, shaped like the form tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerValue {
    pub first_name: String,
    pub last_name: String,
    pub email_group: EmailGroupValue,
    pub phone: String,
    pub notification: Notification,
    pub rating: FieldValue,
    pub send_catalog: bool,
    pub addresses: Vec<AddressEntry>,
}
