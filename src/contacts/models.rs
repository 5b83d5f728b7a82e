//! Contact data models and the wire-to-application field mapping

use serde::{Deserialize, Serialize};

/// A street address. One per contact for now; it is conceivable that a
/// contact would eventually carry several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A phone entry in the canonical application shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// Category key, e.g. "home", "mobile", "office"
    #[serde(rename = "type")]
    pub kind: String,
    /// Formatted as XXX-XXX-XXXX
    pub phone_number: String,
}

/// A contact in the canonical application shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
    pub phone: Phone,
    pub address: Address,
}

/// Input for creating a contact: everything but the system-assigned
/// `id` and `active` fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Phone,
    pub address: Address,
}

/// Phone entry as delivered by the remote source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemotePhone {
    #[serde(rename = "type")]
    pub kind: String,
    pub number: String,
}

/// Contact as delivered by the remote source. The backend uses snake
/// casing (`first_name`) and `phone.number`, so fields are remapped into
/// the application shape before entering the repository.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteContact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
    pub phone: RemotePhone,
    pub address: Address,
}

impl From<RemoteContact> for Contact {
    fn from(remote: RemoteContact) -> Self {
        Self {
            id: remote.id,
            first_name: remote.first_name,
            last_name: remote.last_name,
            email: remote.email,
            active: remote.active,
            phone: Phone {
                kind: remote.phone.kind,
                phone_number: remote.phone.number,
            },
            address: remote.address,
        }
    }
}

/// Check the strict XXX-XXX-XXXX phone number grouping
pub fn is_valid_phone_number(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    if bytes.len() != 12 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        3 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_contact_field_remapping() {
        let remote = RemoteContact {
            id: "1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            active: true,
            phone: RemotePhone {
                kind: "mobile".to_string(),
                number: "555-123-4567".to_string(),
            },
            address: Address {
                street: "1 Main".to_string(),
                city: "Ely".to_string(),
                state: "NV".to_string(),
                zip: "89301".to_string(),
            },
        };

        let contact = Contact::from(remote);
        assert_eq!(contact.id, "1");
        assert_eq!(contact.first_name, "Jane");
        assert_eq!(contact.last_name, "Doe");
        assert_eq!(contact.email, "jane@x.com");
        assert!(contact.active);
        assert_eq!(contact.phone.kind, "mobile");
        assert_eq!(contact.phone.phone_number, "555-123-4567");
        assert_eq!(contact.address.state, "NV");
    }

    #[test]
    fn test_remote_contact_deserializes_snake_case() {
        let json = r#"{
            "id": "1",
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@x.com",
            "active": true,
            "phone": { "type": "mobile", "number": "555-123-4567" },
            "address": { "street": "1 Main", "city": "Ely", "state": "NV", "zip": "89301" }
        }"#;

        let remote: RemoteContact = serde_json::from_str(json).unwrap();
        let contact = Contact::from(remote);
        assert_eq!(contact.first_name, "Jane");
        assert_eq!(contact.phone.phone_number, "555-123-4567");
    }

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact {
            id: "1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            active: true,
            phone: Phone {
                kind: "mobile".to_string(),
                phone_number: "555-123-4567".to_string(),
            },
            address: Address {
                street: "1 Main".to_string(),
                city: "Ely".to_string(),
                state: "NV".to_string(),
                zip: "89301".to_string(),
            },
        };

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["phone"]["type"], "mobile");
        assert_eq!(value["phone"]["phoneNumber"], "555-123-4567");
    }

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("555-123-4567"));
        assert!(is_valid_phone_number("999-999-9999"));
        assert!(!is_valid_phone_number("5551234567"));
        assert!(!is_valid_phone_number("555-123-456"));
        assert!(!is_valid_phone_number("555-123-45678"));
        assert!(!is_valid_phone_number("(555) 123-4567"));
        assert!(!is_valid_phone_number("555-12a-4567"));
        assert!(!is_valid_phone_number(""));
    }
}
