//! Pure view-model types.
//!
//! No rendering happens here: the UI mode, the list projection, and the
//! header are plain data a rendering layer maps onto whatever surface it
//! owns (terminal table, DOM, test assertions).

/// Which form variant is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

/// The two mutually exclusive UI modes: the contact list, or the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    List,
    Form(FormKind),
}

impl UiMode {
    pub fn is_form(&self) -> bool {
        matches!(self, UiMode::Form(_))
    }
}

/// A hide-non-matching projection over the currently rendered contacts.
///
/// Projections never alter the underlying contact set or the tag index;
/// clearing one restores the unfiltered view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    All,
    /// Exact tag-name filter, resolved through the tag index.
    Tag(String),
    /// Case-insensitive substring match on the display name.
    Search(String),
}

/// The header a list rendering shows above the visible contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListHeader {
    All,
    Tagged(String),
    Search(String),
    /// Zero contacts are visible under the current projection.
    Empty,
}

impl std::fmt::Display for ListHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListHeader::All => write!(f, "All contacts"),
            ListHeader::Tagged(tag) => write!(f, "Contacts tagged {tag}"),
            ListHeader::Search(query) => write!(f, "Contacts matching \"{query}\""),
            ListHeader::Empty => write!(f, "No contacts found"),
        }
    }
}

impl ListHeader {
    /// Derive the header for a projection and the visible element count.
    ///
    /// The empty-state message composes with every projection: zero visible
    /// elements always win.
    pub fn derive(projection: &Projection, visible: usize) -> Self {
        if visible == 0 {
            return ListHeader::Empty;
        }
        match projection {
            Projection::All => ListHeader::All,
            Projection::Tag(tag) => ListHeader::Tagged(tag.clone()),
            Projection::Search(query) => ListHeader::Search(query.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_list() {
        assert_eq!(UiMode::default(), UiMode::List);
        assert!(!UiMode::List.is_form());
        assert!(UiMode::Form(FormKind::Add).is_form());
    }

    #[test]
    fn header_follows_projection() {
        assert_eq!(ListHeader::derive(&Projection::All, 3), ListHeader::All);
        assert_eq!(
            ListHeader::derive(&Projection::Tag("work".into()), 1),
            ListHeader::Tagged("work".into())
        );
        assert_eq!(
            ListHeader::derive(&Projection::Search("ada".into()), 2),
            ListHeader::Search("ada".into())
        );
    }

    #[test]
    fn zero_visible_always_reads_empty() {
        for projection in [
            Projection::All,
            Projection::Tag("work".into()),
            Projection::Search("nobody".into()),
        ] {
            assert_eq!(ListHeader::derive(&projection, 0), ListHeader::Empty);
        }
    }

    #[test]
    fn header_text() {
        assert_eq!(ListHeader::Tagged("work".into()).to_string(), "Contacts tagged work");
        assert_eq!(ListHeader::Empty.to_string(), "No contacts found");
    }
}
