//! Contact domain types.

use serde::{Deserialize, Serialize};

/// Server-assigned contact identifier, stable across updates.
pub type ContactId = i64;

/// Coerce an id arriving as text (route fragment, form field) to a
/// [`ContactId`].
pub fn parse_contact_id(input: &str) -> Option<ContactId> {
    input.trim().parse().ok()
}

/// A contact as the backend stores it.
///
/// `tags` is the comma-joined wire form, possibly empty. Order within the
/// string is form insertion order and carries no meaning; duplicates are
/// not deduplicated on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub full_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub tags: String,
}

impl Contact {
    /// Non-empty trimmed tag names from the wire string.
    pub fn tag_list(&self) -> Vec<String> {
        rolo_tags::split_tag_list(&self.tags)
    }

    /// Case-insensitive substring match against the display name.
    pub fn matches_name(&self, query: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// The id-less record submitted on create and update.
///
/// Serializes to the backend body shape `{..fields.., tags: "a,b,c"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub full_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub tags: String,
}

impl ContactDraft {
    /// A draft pre-filled from an existing contact, for edit forms.
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            full_name: contact.full_name.clone(),
            email: contact.email.clone(),
            phone_number: contact.phone_number.clone(),
            tags: contact.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ada() -> Contact {
        Contact {
            id: 1,
            full_name: "Ada Lovelace".into(),
            email: Some("ada@example.com".into()),
            phone_number: None,
            tags: "work,family".into(),
        }
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case(" 7 ", Some(7))]
    #[case("seven", None)]
    #[case("", None)]
    #[case("1.5", None)]
    fn id_coercion(#[case] input: &str, #[case] expected: Option<ContactId>) {
        assert_eq!(parse_contact_id(input), expected);
    }

    #[test]
    fn tag_list_splits_wire_form() {
        assert_eq!(ada().tag_list(), vec!["work", "family"]);

        let untagged = Contact {
            tags: String::new(),
            ..ada()
        };
        assert!(untagged.tag_list().is_empty());
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let c = ada();
        assert!(c.matches_name("ada"));
        assert!(c.matches_name("LOVE"));
        assert!(c.matches_name(""));
        assert!(!c.matches_name("grace"));
    }

    #[test]
    fn contact_serde_round_trip() {
        let c = ada();
        let json = serde_json::to_string(&c).unwrap();
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn contact_tolerates_missing_tags_field() {
        let c: Contact = serde_json::from_str(
            r#"{"id":2,"full_name":"Grace Hopper","email":null,"phone_number":null}"#,
        )
        .unwrap();
        assert_eq!(c.tags, "");
    }

    #[test]
    fn draft_from_contact_drops_id_only() {
        let c = ada();
        let draft = ContactDraft::from_contact(&c);
        assert_eq!(draft.full_name, c.full_name);
        assert_eq!(draft.tags, c.tags);
    }
}
