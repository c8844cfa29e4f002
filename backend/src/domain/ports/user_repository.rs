//! Port abstraction for user account storage and its errors.
use async_trait::async_trait;

use crate::domain::{Contact, NewUser, User, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// No user carries the identifier.
        NotFound { id: u32 } => "user {id} not found",
        /// An account already exists for the contact.
        Conflict { contact_id: u32 } => "user already exists for contact {contact_id}",
        /// The change violates a user invariant.
        Rejected { message: String } => "user change rejected: {message}",
        /// The backing store failed.
        Storage { message: String } => "user storage failed: {message}",
    }
}

/// Read and write access to user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, in ascending id order.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// The first user, used when a request carries no identity.
    async fn first(&self) -> Result<Option<User>, UserRepositoryError>;

    /// Create an account for `contact`.
    ///
    /// The username and email are taken from the contact; the new id is one
    /// past the current maximum.
    async fn create(&self, user: NewUser, contact: Contact) -> Result<User, UserRepositoryError>;

    /// Apply `patch` to an existing user and return the result.
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, UserRepositoryError>;
}
