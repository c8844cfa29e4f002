//! Contact store backed by a locked vector.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactPatch, ContactQuery, NewContact};

/// Contacts kept in ascending id order.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create a repository holding `contacts`.
    #[must_use]
    pub fn new(mut contacts: Vec<Contact>) -> Self {
        contacts.sort_by_key(|contact| contact.id);
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>, ContactRepositoryError> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .iter()
            .filter(|contact| query.matches(contact))
            .cloned()
            .collect())
    }

    async fn all(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find(&self, id: u32) -> Result<Option<Contact>, ContactRepositoryError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|contact| contact.id == id).cloned())
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError> {
        let mut contacts = self.contacts.write().await;
        let id = contacts
            .iter()
            .map(|existing| existing.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
            .ok_or_else(|| ContactRepositoryError::storage("contact ids exhausted"))?;
        let created = contact.into_contact(id);
        contacts.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: u32,
        patch: ContactPatch,
    ) -> Result<Contact, ContactRepositoryError> {
        let mut contacts = self.contacts.write().await;
        let contact = contacts
            .iter_mut()
            .find(|contact| contact.id == id)
            .ok_or_else(|| ContactRepositoryError::not_found(id))?;
        let mut updated = contact.clone();
        updated
            .apply(patch)
            .map_err(|err| ContactRepositoryError::rejected(err.to_string()))?;
        *contact = updated.clone();
        Ok(updated)
    }
}
