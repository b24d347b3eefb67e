//! Form-to-record serialization.
//!
//! A submitted form arrives as ordered `(name, value)` pairs. Text inputs
//! carry their value; a checked checkbox control carries only the marker
//! [`CHECKBOX_MARKER`]. Serialization maps the enumerated text fields onto
//! a [`ContactDraft`] and accumulates every checked control's *name* into
//! the draft's comma-joined `tags` attribute, in form iteration order.
//! This is the canonical contract for every create/update caller.

use rolo_tags::join_tag_list;

use crate::contact::ContactDraft;

/// The literal value a checked checkbox control submits.
pub const CHECKBOX_MARKER: &str = "on";

/// Text field names recognized by [`serialize_form`]. Unknown text fields
/// are ignored.
pub const TEXT_FIELDS: [&str; 3] = ["full_name", "email", "phone_number"];

/// A single form control's submitted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// A plain text input.
    Text(String),
    /// A checked checkbox control; its field name becomes a tag.
    Checked,
}

impl FormValue {
    /// Parse a raw submitted value, recognizing the checkbox marker.
    pub fn from_raw(value: &str) -> Self {
        if value == CHECKBOX_MARKER {
            FormValue::Checked
        } else {
            FormValue::Text(value.to_string())
        }
    }
}

/// Serialize form pairs into a [`ContactDraft`].
///
/// Empty text values map to `None` for the optional fields. No literal
/// checkbox marker ever lands in a draft field.
pub fn serialize_form(pairs: &[(String, FormValue)]) -> ContactDraft {
    let mut draft = ContactDraft::default();
    let mut tags: Vec<&str> = Vec::new();

    for (name, value) in pairs {
        match value {
            FormValue::Checked => tags.push(name.as_str()),
            FormValue::Text(text) => match name.as_str() {
                "full_name" => draft.full_name = text.clone(),
                "email" => draft.email = non_empty(text),
                "phone_number" => draft.phone_number = non_empty(text),
                _ => {}
            },
        }
    }

    draft.tags = join_tag_list(&tags);
    draft
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
