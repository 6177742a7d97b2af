use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-assigned contact identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub String);

impl From<String> for ContactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// A contact as stored on the server.
///
/// Contacts are created by the server and never edited in place; the only other
/// lifecycle event is deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Case-insensitive substring match on the name. `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Case-insensitive equality on the name.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Payload for creating a new contact (`POST /contacts`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Both fields present. Format checks live in [`validation`](crate::model::validation).
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_wire_format() {
        let json = r#"{"id":"7","name":"Rosie Simpson","phone":"459-12-56"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact, Contact::new("7", "Rosie Simpson", "459-12-56"));

        let payload = serde_json::to_value(NewContact::new("Ann", "111")).unwrap();
        assert_eq!(payload, serde_json::json!({ "name": "Ann", "phone": "111" }));
    }

    #[test]
    fn test_name_matching_is_unicode_aware() {
        let contact = Contact::new("1", "Олена Їжак", "+380 44 123 4567");
        assert!(contact.name_contains("олена"));
        assert!(contact.name_contains("їжак"));
        assert!(contact.has_name("ОЛЕНА ЇЖАК"));
        assert!(!contact.has_name("Олена"));
    }

    #[test]
    fn test_new_contact_completeness() {
        assert!(NewContact::new("Ann", "111").is_complete());
        assert!(!NewContact::new("", "111").is_complete());
        assert!(!NewContact::new("Ann", "").is_complete());
    }
}
