//! Application users and their access scope.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::access::{AccessScope, AccessScopeError};
use super::group::GroupId;

/// Stable numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
    /// The contact has no email address to use as a username.
    #[error("contact {contact_id} has no email address to use as username")]
    MissingEmail {
        /// Contact the user was requested for.
        contact_id: u32,
    },
    /// Manage and view lists are inconsistent.
    #[error(transparent)]
    Scope(#[from] AccessScopeError),
}

/// An account able to sign in.
///
/// ## Invariants
/// - Every managed group is also viewable (enforced by [`AccessScope`]).
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Identifier.
    pub id: UserId,
    /// Login name, usually an email address.
    pub username: String,
    password: Zeroizing<String>,
    /// Contact record describing the person.
    pub contact_id: u32,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Role labels.
    pub roles: Vec<String>,
    /// Permission codes.
    pub permissions: Vec<String>,
    /// Groups the user may manage and view.
    pub scope: AccessScope,
}

/// Raw parts accepted by [`User::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserParts {
    /// Identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
    /// Linked contact.
    pub contact_id: u32,
    /// Display name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Role labels.
    pub roles: Vec<String>,
    /// Permission codes.
    pub permissions: Vec<String>,
    /// Manageable groups.
    pub manage_group_ids: Vec<GroupId>,
    /// Viewable groups.
    pub view_group_ids: Vec<GroupId>,
}

impl User {
    /// Validate parts and build a user.
    pub fn try_from_parts(parts: UserParts) -> Result<Self, UserValidationError> {
        if parts.password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        let scope = AccessScope::new(parts.manage_group_ids, parts.view_group_ids)?;
        Ok(Self {
            id: parts.id,
            username: parts.username,
            password: Zeroizing::new(parts.password),
            contact_id: parts.contact_id,
            full_name: parts.full_name,
            email: parts.email,
            roles: parts.roles,
            permissions: parts.permissions,
            scope,
        })
    }

    /// Compare a candidate password with the stored one.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.as_str() == candidate
    }

    /// First role label, if any.
    #[must_use]
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    /// Apply a partial update. The user is left untouched on error.
    pub fn apply(&mut self, patch: UserPatch) -> Result<(), UserValidationError> {
        let manage = patch
            .manage_group_ids
            .unwrap_or_else(|| self.scope.manage_group_ids().to_vec());
        let view = patch
            .view_group_ids
            .unwrap_or_else(|| self.scope.view_group_ids().to_vec());
        let scope = AccessScope::new(manage, view)?;
        if let Some(password) = patch.password.as_deref() {
            if password.is_empty() {
                return Err(UserValidationError::EmptyPassword);
            }
        }

        self.scope = scope;
        if let Some(password) = patch.password {
            self.password = Zeroizing::new(password);
        }
        if let Some(roles) = patch.roles {
            self.roles = roles;
        }
        if let Some(permissions) = patch.permissions {
            self.permissions = permissions;
        }
        Ok(())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("contact_id", &self.contact_id)
            .field("full_name", &self.full_name)
            .field("roles", &self.roles)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Request to create a user for an existing contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Contact the account belongs to.
    pub contact_id: u32,
    /// Plain-text password.
    pub password: String,
    /// Role labels.
    pub roles: Vec<String>,
    /// Permission codes.
    pub permissions: Vec<String>,
    /// Manageable groups.
    pub manage_group_ids: Vec<GroupId>,
    /// Viewable groups.
    pub view_group_ids: Vec<GroupId>,
}

/// Partial update of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// New password.
    pub password: Option<String>,
    /// Replacement role labels.
    pub roles: Option<Vec<String>>,
    /// Replacement permission codes.
    pub permissions: Option<Vec<String>>,
    /// Replacement manageable groups.
    pub manage_group_ids: Option<Vec<GroupId>>,
    /// Replacement viewable groups.
    pub view_group_ids: Option<Vec<GroupId>>,
}
