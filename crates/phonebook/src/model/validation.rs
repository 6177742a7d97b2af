//! Field validation for the add-contact form.
//!
//! These checks run before a create request is issued. The operation layer itself only
//! requires non-empty fields.

use crate::error::PhonebookError;
use crate::model::NewContact;
use regex::Regex;
use std::sync::LazyLock;

/// Letters of any script, optionally joined by an apostrophe, dash or space.
static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}+(?:(?:[' \-][\p{L} ])?\p{L}*)*$").expect("name pattern compiles")
});

/// Digits with an optional leading `+`, separators and a parenthesised area code.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\+?\d{1,4}?[ .\-\s]?\(?\d{1,3}?\)?[ .\-\s]?\d{1,4}[ .\-\s]?\d{1,4}[ .\-\s]?\d{1,9}$",
    )
    .expect("phone pattern compiles")
});

pub fn validate_name(name: &str) -> Result<(), PhonebookError> {
    if NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(PhonebookError::InvalidName(name.to_string()))
    }
}

pub fn validate_phone(phone: &str) -> Result<(), PhonebookError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(PhonebookError::InvalidPhone(phone.to_string()))
    }
}

/// Trims both fields and checks their format.
pub fn validate_new_contact(name: &str, phone: &str) -> Result<NewContact, PhonebookError> {
    let contact = NewContact::new(name.trim(), phone.trim());
    validate_name(&contact.name)?;
    validate_phone(&contact.phone)?;
    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_names() {
        for name in [
            "Ann",
            "Jacob Mercer",
            "Anna-Maria",
            "O'Connor",
            "Charles de Batz de Castelmore d'Artagnan",
            "Іван Франко",
        ] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_names() {
        for name in ["", "-Ann", "Ann-", "R2D2", "Ann!", " Ann"] {
            assert_eq!(
                validate_name(name),
                Err(PhonebookError::InvalidName(name.to_string())),
                "{name:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_accepts_phones() {
        for phone in [
            "459-12-56",
            "+380 44 123 4567",
            "38 (044) 123-45-67",
            "+1 (555) 010.9999",
            "2279126",
        ] {
            assert!(validate_phone(phone).is_ok(), "{phone} should be valid");
        }
    }

    #[test]
    fn test_rejects_phones() {
        for phone in ["", "111", "phone", "12-ab-34", "++12345"] {
            assert!(validate_phone(phone).is_err(), "{phone:?} should be invalid");
        }
    }

    #[test]
    fn test_validate_new_contact_trims() {
        let contact = validate_new_contact("  Eden Clements ", " 645-17-79 ").unwrap();
        assert_eq!(contact, NewContact::new("Eden Clements", "645-17-79"));

        // Surrounding whitespace is accepted here, not rejected.
        let contact = validate_new_contact(" Ann", "111-22-33").unwrap();
        assert_eq!(contact.name, "Ann");
    }
}
