//! In-memory [`ContactStore`] implementation.
//!
//! Uses a `Vec` behind `std::sync::RwLock` for thread safety, with
//! auto-incremented ids. Backs the session tests and any caller that wants
//! the coordinator without a network.

use std::sync::RwLock;

use async_trait::async_trait;

use super::{ContactStore, StoreError};
use crate::contact::{Contact, ContactDraft, ContactId};

struct Inner {
    contacts: Vec<Contact>,
    next_id: ContactId,
}

/// In-memory contact collection with server-style assigned ids.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                contacts: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn materialize(draft: &ContactDraft, id: ContactId) -> Contact {
    Contact {
        id,
        full_name: draft.full_name.clone(),
        email: draft.email.clone(),
        phone_number: draft.phone_number.clone(),
        tags: draft.tags.clone(),
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Contact>, StoreError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.contacts.clone())
    }

    async fn fetch_one(&self, id: ContactId) -> Result<Contact, StoreError> {
        let inner = self.inner.read().unwrap();
        inner
            .contacts
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        let contact = materialize(draft, id);
        inner.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, draft: &ContactDraft, id: ContactId) -> Result<Contact, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let slot = inner
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = materialize(draft, id);
        Ok(slot.clone())
    }

    async fn remove(&self, id: ContactId) -> Result<ContactId, StoreError> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.contacts.len();
        inner.contacts.retain(|c| c.id != id);
        if inner.contacts.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, tags: &str) -> ContactDraft {
        ContactDraft {
            full_name: name.into(),
            email: None,
            phone_number: None,
            tags: tags.into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.create(&draft("Ada", "")).await.unwrap();
        let b = store.create(&draft("Grace", "")).await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn fetch_one_reports_not_found() {
        let store = MemoryStore::new();
        let err = store.fetch_one(99).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(99)));
    }

    #[tokio::test]
    async fn update_replaces_whole_record() {
        let store = MemoryStore::new();
        let ada = store.create(&draft("Ada", "work,family")).await.unwrap();
        let updated = store.update(&draft("Ada L.", "work"), ada.id).await.unwrap();
        assert_eq!(updated.id, ada.id);
        assert_eq!(updated.full_name, "Ada L.");
        assert_eq!(updated.tags, "work");
        assert_eq!(store.fetch_one(ada.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.update(&draft("Nobody", ""), 5).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(5)));
    }

    #[tokio::test]
    async fn remove_returns_the_same_id() {
        let store = MemoryStore::new();
        let ada = store.create(&draft("Ada", "")).await.unwrap();
        assert_eq!(store.remove(ada.id).await.unwrap(), ada.id);
        assert!(store.fetch_all().await.unwrap().is_empty());

        let err = store.remove(ada.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
