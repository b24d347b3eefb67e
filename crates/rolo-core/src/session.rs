//! The view coordinator.
//!
//! [`Session`] owns the derived tag index, the rendered contact list, the
//! UI mode, and the pending-edit id, and drives a [`ContactStore`] backend.
//! Index and view state are mutated strictly after a store call succeeds,
//! never speculatively; a failed operation leaves every piece of state
//! untouched.
//!
//! The model is single-actor and cooperative: one request per user action,
//! no locking, no cancellation of issued requests. A second edit started
//! before the first completes can race, exactly as the backend allows.

use crate::contact::{Contact, ContactId};
use crate::form::{serialize_form, FormValue};
use crate::store::{ContactStore, StoreError};
use crate::view::{FormKind, ListHeader, Projection, UiMode};
use rolo_tags::TagIndex;

pub struct Session<S> {
    store: S,
    index: TagIndex<ContactId>,
    contacts: Vec<Contact>,
    mode: UiMode,
    projection: Projection,
    pending_edit: Option<ContactId>,
}

impl<S: ContactStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            index: TagIndex::new(),
            contacts: Vec::new(),
            mode: UiMode::List,
            projection: Projection::All,
            pending_edit: None,
        }
    }

    /// Fetch the full contact set, rebuild the index from it, and return
    /// to the unfiltered list.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        let contacts = self.store.fetch_all().await?;
        tracing::debug!(count = contacts.len(), "loaded contact set");
        self.contacts = contacts;
        self.rebuild_index();
        self.projection = Projection::All;
        self.mode = UiMode::List;
        self.pending_edit = None;
        Ok(())
    }

    /// List → Form(Add). Any pending edit is cleared.
    pub fn open_add_form(&mut self) {
        self.pending_edit = None;
        self.mode = UiMode::Form(FormKind::Add);
    }

    /// List → Form(Edit): fetch the contact's current data for form
    /// population and mark it as the pending edit.
    pub async fn open_edit_form(&mut self, id: ContactId) -> Result<Contact, StoreError> {
        let contact = self.store.fetch_one(id).await?;
        self.pending_edit = Some(id);
        self.mode = UiMode::Form(FormKind::Edit);
        Ok(contact)
    }

    /// Form → List without submitting. Form state is abandoned.
    pub fn cancel_form(&mut self) {
        self.pending_edit = None;
        self.mode = UiMode::List;
    }

    /// Serialize the form pairs and submit: update when a pending edit is
    /// set, create otherwise. On success the index and rendered list are
    /// brought in line with the returned contact and the form closes.
    pub async fn submit(&mut self, pairs: &[(String, FormValue)]) -> Result<Contact, StoreError> {
        let draft = serialize_form(pairs);
        let saved = match self.pending_edit {
            Some(id) => self.store.update(&draft, id).await?,
            None => self.store.create(&draft).await?,
        };
        tracing::debug!(id = saved.id, "saved contact");

        // Old entries first: after an edit the id may only appear under
        // the contact's current tags.
        self.index.remove(saved.id);
        self.index.insert(saved.id, &saved.tags);
        self.upsert_rendered(saved.clone());
        self.pending_edit = None;
        self.mode = UiMode::List;
        Ok(saved)
    }

    /// Delete a contact, then drop its index and view entries.
    pub async fn delete(&mut self, id: ContactId) -> Result<ContactId, StoreError> {
        let removed = self.store.remove(id).await?;
        tracing::debug!(id = removed, "deleted contact");
        self.index.remove(removed);
        self.contacts.retain(|c| c.id != removed);
        if self.pending_edit == Some(removed) {
            self.pending_edit = None;
        }
        Ok(removed)
    }

    /// Project the rendered list down to contacts carrying an exact tag.
    ///
    /// Resolved through the index only; a tag with no entries projects to
    /// an empty view.
    pub fn filter_by_tag(&mut self, tag: &str) {
        self.projection = Projection::Tag(tag.to_string());
    }

    /// Re-fetch the full contact set and project name-substring matches.
    ///
    /// Search deliberately does not consult the tag index; the fresh fetch
    /// also rebuilds it as a side effect of re-rendering.
    pub async fn search(&mut self, text: &str) -> Result<(), StoreError> {
        let contacts = self.store.fetch_all().await?;
        self.contacts = contacts;
        self.rebuild_index();
        self.projection = Projection::Search(text.to_string());
        Ok(())
    }

    /// Clear any projection and restore the unfiltered view.
    pub fn show_all(&mut self) {
        self.projection = Projection::All;
    }

    /// The contacts visible under the current projection, in render order.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| self.is_visible(c))
            .collect()
    }

    /// The list header for the current projection and visibility.
    pub fn header(&self) -> ListHeader {
        ListHeader::derive(&self.projection, self.visible_contacts().len())
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn pending_edit(&self) -> Option<ContactId> {
        self.pending_edit
    }

    /// The full rendered contact list, ignoring any projection.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn index(&self) -> &TagIndex<ContactId> {
        &self.index
    }

    fn is_visible(&self, contact: &Contact) -> bool {
        match &self.projection {
            Projection::All => true,
            Projection::Tag(tag) => self.index.contains(tag, contact.id),
            Projection::Search(query) => contact.matches_name(query),
        }
    }

    fn upsert_rendered(&mut self, contact: Contact) {
        match self.contacts.iter_mut().find(|c| c.id == contact.id) {
            Some(slot) => *slot = contact,
            None => self.contacts.push(contact),
        }
    }

    fn rebuild_index(&mut self) {
        let Self {
            index, contacts, ..
        } = self;
        index.rebuild(contacts.iter().map(|c| (c.id, c.tags.as_str())));
    }
}
