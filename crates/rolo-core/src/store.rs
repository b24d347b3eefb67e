//! Storage abstraction for the contact collection.
//!
//! The [`ContactStore`] trait covers the five operations the coordinator
//! needs, enabling pluggable backends (the HTTP client in `rolo-client`,
//! the in-memory store here). Implementations must be `Send + Sync` to
//! work with async runtimes.

pub mod memory;

use async_trait::async_trait;

use crate::contact::{Contact, ContactDraft, ContactId};

/// Abstract backend for the contact collection.
///
/// Every operation performs exactly one logical round trip and reports
/// failure as a [`StoreError`] value; errors never escape as panics.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Retrieve the full current contact set.
    async fn fetch_all(&self) -> Result<Vec<Contact>, StoreError>;

    /// Retrieve a single contact by id.
    async fn fetch_one(&self, id: ContactId) -> Result<Contact, StoreError>;

    /// Create a contact; the result carries the assigned id.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, StoreError>;

    /// Submit a full replacement for the contact at `id`.
    async fn update(&self, draft: &ContactDraft, id: ContactId) -> Result<Contact, StoreError>;

    /// Delete the contact at `id`.
    ///
    /// Returns the same id on success so callers can drop the matching
    /// index and view entries without a second lookup.
    async fn remove(&self, id: ContactId) -> Result<ContactId, StoreError>;
}

/// Errors from a contact store.
///
/// There is no transient/permanent distinction; every failure is terminal
/// for the one action that hit it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Network failure: {message}")]
    Network { message: String },

    #[error("Contact not found: {0}")]
    NotFound(ContactId),

    #[error("Malformed response: {message}")]
    Decode { message: String },

    #[error("Backend returned status {code}")]
    Status { code: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::NotFound(7);
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains('7'));

        let err = StoreError::Decode {
            message: "expected an integer id".into(),
        };
        assert!(err.to_string().contains("integer id"));

        let err = StoreError::Status { code: 500 };
        assert!(err.to_string().contains("500"));
    }
}
