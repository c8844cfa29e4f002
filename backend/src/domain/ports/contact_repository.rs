//! Port abstraction for CRM contact storage.
use async_trait::async_trait;

use crate::domain::{Contact, ContactPatch, ContactQuery, NewContact};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// No contact carries the identifier.
        NotFound { id: u32 } => "contact {id} not found",
        /// The change violates a contact invariant.
        Rejected { message: String } => "contact change rejected: {message}",
        /// The backing store failed.
        Storage { message: String } => "contact storage failed: {message}",
    }
}

/// Read and append access to contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Contacts matching `query`, in ascending id order.
    async fn list(&self, query: &ContactQuery) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Every contact, in ascending id order.
    async fn all(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Fetch a contact by identifier.
    async fn find(&self, id: u32) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Store a new contact under the next free identifier.
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError>;

    /// Apply `patch` to an existing contact and return the result.
    async fn update(&self, id: u32, patch: ContactPatch)
    -> Result<Contact, ContactRepositoryError>;
}
