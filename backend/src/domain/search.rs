//! Free-text search across contacts and groups.

use std::str::FromStr;

use super::contact::Contact;
use super::group::Group;

/// Default number of hits returned per kind.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Which collections a search covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchKind {
    /// Contacts and groups.
    #[default]
    All,
    /// Contacts only.
    Contacts,
    /// Groups only.
    Groups,
}

impl SearchKind {
    /// Whether contacts are searched.
    #[must_use]
    pub const fn includes_contacts(self) -> bool {
        matches!(self, Self::All | Self::Contacts)
    }

    /// Whether groups are searched.
    #[must_use]
    pub const fn includes_groups(self) -> bool {
        matches!(self, Self::All | Self::Groups)
    }
}

/// Error returned for an unknown search kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("search type must be one of all, contacts, groups; got {0}")]
pub struct UnknownSearchKind(pub String);

impl FromStr for SearchKind {
    type Err = UnknownSearchKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "contacts" => Ok(Self::Contacts),
            "groups" => Ok(Self::Groups),
            _ => Err(UnknownSearchKind(s.to_owned())),
        }
    }
}

/// Contacts whose first or last name contains `query`, case-insensitively.
#[must_use]
pub fn search_contacts<'a>(contacts: &'a [Contact], query: &str, limit: usize) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();
    contacts
        .iter()
        .filter(|contact| {
            contact.first_name.to_lowercase().contains(&needle)
                || contact.last_name.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}

/// Groups whose name contains `query`, case-insensitively.
#[must_use]
pub fn search_groups<'a>(groups: &'a [Group], query: &str, limit: usize) -> Vec<&'a Group> {
    let needle = query.trim().to_lowercase();
    groups
        .iter()
        .filter(|group| group.name.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
