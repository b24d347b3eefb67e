//! Response body decoding.
//!
//! Pure `&str -> Result` functions over the backend's JSON shapes. The
//! backend has been observed returning a single contact either bare or
//! wrapped in a one-element array depending on the route; both shapes
//! normalize to a single [`Contact`] here so the rest of the crate only
//! ever sees one representation.

use serde::Deserialize;

use rolo_core::{Contact, StoreError};

/// A contact as it appears on the wire. `tags` may be absent or null.
#[derive(Debug, Deserialize)]
struct WireContact {
    id: i64,
    full_name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

impl From<WireContact> for Contact {
    fn from(wire: WireContact) -> Self {
        Contact {
            id: wire.id,
            full_name: wire.full_name,
            email: wire.email,
            phone_number: wire.phone_number,
            tags: wire.tags.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(WireContact),
    Many(Vec<WireContact>),
}

fn decode_error(e: impl std::fmt::Display) -> StoreError {
    StoreError::Decode {
        message: e.to_string(),
    }
}

/// Decode a single-contact body, unwrapping a one-element array if the
/// backend sent one.
pub fn decode_contact(body: &str) -> Result<Contact, StoreError> {
    match serde_json::from_str::<OneOrMany>(body).map_err(decode_error)? {
        OneOrMany::One(wire) => Ok(wire.into()),
        OneOrMany::Many(mut wires) => {
            if wires.len() == 1 {
                Ok(wires.remove(0).into())
            } else {
                Err(decode_error(format!(
                    "expected one contact, got {}",
                    wires.len()
                )))
            }
        }
    }
}

/// Decode the full contact collection.
pub fn decode_contact_list(body: &str) -> Result<Vec<Contact>, StoreError> {
    let wires: Vec<WireContact> = serde_json::from_str(body).map_err(decode_error)?;
    Ok(wires.into_iter().map(Contact::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "id": 1,
        "full_name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone_number": "12345678901",
        "tags": "work,family"
    }"#;

    const LIST: &str = r#"[
        {"id": 1, "full_name": "Ada Lovelace", "email": null, "phone_number": null, "tags": "work"},
        {"id": 2, "full_name": "Grace Hopper", "email": "grace@example.com", "phone_number": null, "tags": ""}
    ]"#;

    #[test]
    fn decode_single() {
        let contact = decode_contact(SINGLE).unwrap();
        assert_eq!(contact.id, 1);
        assert_eq!(contact.full_name, "Ada Lovelace");
        assert_eq!(contact.tags, "work,family");
    }

    #[test]
    fn decode_single_wrapped_in_array() {
        let body = format!("[{SINGLE}]");
        let contact = decode_contact(&body).unwrap();
        assert_eq!(contact.id, 1);
    }

    #[test]
    fn decode_list() {
        let contacts = decode_contact_list(LIST).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].tag_list(), vec!["work"]);
        assert!(contacts[1].tag_list().is_empty());
    }

    #[test]
    fn null_tags_normalize_to_empty() {
        let contact =
            decode_contact(r#"{"id": 3, "full_name": "Alan Turing", "tags": null}"#).unwrap();
        assert_eq!(contact.tags, "");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_contact("not json").unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));

        let err = decode_contact_list(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn empty_array_is_a_decode_error() {
        let err = decode_contact("[]").unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}
