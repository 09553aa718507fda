//! Repeatable address sub-form

use serde::Serialize;

/// Address category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressType {
    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Work,
            Self::Work => Self::Other,
            Self::Other => Self::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Home => Self::Other,
            Self::Work => Self::Home,
            Self::Other => Self::Work,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Other => "Other",
        }
    }
}

/// Editable parts of an address entry, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    AddressType,
    Street1,
    Street2,
    City,
    State,
    Zip,
}

impl AddressField {
    pub const ALL: [AddressField; 6] = [
        AddressField::AddressType,
        AddressField::Street1,
        AddressField::Street2,
        AddressField::City,
        AddressField::State,
        AddressField::Zip,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddressType => "Address Type",
            Self::Street1 => "Street Address 1",
            Self::Street2 => "Street Address 2",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip Code",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressEntry {
    pub address_type: AddressType,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl AddressEntry {
    /// Text slot for a field (`None` for the address type)
    pub fn text(&self, field: AddressField) -> Option<&str> {
        match field {
            AddressField::AddressType => None,
            AddressField::Street1 => Some(&self.street1),
            AddressField::Street2 => Some(&self.street2),
            AddressField::City => Some(&self.city),
            AddressField::State => Some(&self.state),
            AddressField::Zip => Some(&self.zip),
        }
    }

    pub fn text_mut(&mut self, field: AddressField) -> Option<&mut String> {
        match field {
            AddressField::AddressType => None,
            AddressField::Street1 => Some(&mut self.street1),
            AddressField::Street2 => Some(&mut self.street2),
            AddressField::City => Some(&mut self.city),
            AddressField::State => Some(&mut self.state),
            AddressField::Zip => Some(&mut self.zip),
        }
    }

    pub fn display_value(&self, field: AddressField) -> String {
        match self.text(field) {
            Some(text) => text.to_string(),
            None => self.address_type.label().to_string(),
        }
    }
}

/// Ordered, append-only list of addresses. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressList {
    entries: Vec<AddressEntry>,
}

impl AddressList {
    pub fn new() -> Self {
        Self {
            entries: vec![AddressEntry::default()],
        }
    }

    /// Append a default (home, blank) entry and return its index
    pub fn push_default(&mut self) -> usize {
        self.entries.push(AddressEntry::default());
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&AddressEntry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AddressEntry> {
        self.entries.get_mut(index)
    }

    pub fn to_vec(&self) -> Vec<AddressEntry> {
        self.entries.clone()
    }
}

impl Default for AddressList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_list_has_one_home_entry() {
        let list = AddressList::new();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&AddressEntry::default()));
        assert_eq!(list.get(0).unwrap().address_type, AddressType::Home);
    }

    #[test]
    fn test_push_default_appends_blank_entry() {
        let mut list = AddressList::new();
        list.get_mut(0).unwrap().city = "Springfield".to_string();
        let index = list.push_default();
        assert_eq!(index, 1);
        assert_eq!(list.get(1), Some(&AddressEntry::default()));
        assert_eq!(list.get(0).unwrap().city, "Springfield");
    }

    #[test]
    fn test_address_type_cycles() {
        assert_eq!(AddressType::Home.next(), AddressType::Work);
        assert_eq!(AddressType::Other.next(), AddressType::Home);
        assert_eq!(AddressType::Home.prev(), AddressType::Other);
    }

    #[test]
    fn test_text_slots() {
        let mut entry = AddressEntry::default();
        assert!(entry.text(AddressField::AddressType).is_none());
        entry.text_mut(AddressField::Zip).unwrap().push_str("12345");
        assert_eq!(entry.zip, "12345");
        assert_eq!(entry.display_value(AddressField::AddressType), "Home");
    }

    #[test]
    fn test_serialization_shape() {
        let list = AddressList::new();
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "addressType": "home",
                "street1": "",
                "street2": "",
                "city": "",
                "state": "",
                "zip": ""
            }])
        );
    }
}
