//! CRM contacts.
//!
//! Every contact belongs to exactly one primary group, which governs who may
//! see it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::access::ScopedByGroup;
use super::group::GroupId;

/// Recorded gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// A person in the CRM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Identifier.
    pub id: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, if known.
    pub email: Option<String>,
    /// Mobile phone number.
    pub phone: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Age bracket such as `20-30`.
    pub age_group: String,
    /// Date of birth, if known.
    pub date_of_birth: Option<NaiveDate>,
    /// Civil status such as `Single`.
    pub civil_status: String,
    /// Workplace, if known.
    pub place_of_work: Option<String>,
    /// Primary group.
    pub group_id: GroupId,
    /// Role in the primary group.
    pub role: String,
    /// Home country.
    pub country: String,
    /// Home district.
    pub district: String,
    /// Free-form street address.
    pub free_form: Option<String>,
}

impl Contact {
    /// `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Apply a partial update to the person fields.
    pub fn apply(&mut self, patch: ContactPatch) -> Result<(), ContactValidationError> {
        if let Some(first_name) = patch.first_name {
            self.first_name = required_name(first_name, ContactValidationError::EmptyFirstName)?;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = required_name(last_name, ContactValidationError::EmptyLastName)?;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(age_group) = patch.age_group {
            self.age_group = age_group;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(civil_status) = patch.civil_status {
            self.civil_status = civil_status;
        }
        if let Some(place_of_work) = patch.place_of_work {
            self.place_of_work = Some(place_of_work);
        }
        Ok(())
    }
}

impl ScopedByGroup for Contact {
    fn scope_group_id(&self) -> GroupId {
        self.group_id
    }
}

/// Validation errors for contact input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    /// First name was blank.
    #[error("first name must not be empty")]
    EmptyFirstName,
    /// Last name was blank.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// Phone number was blank.
    #[error("phone must not be empty")]
    EmptyPhone,
}

fn required_name(
    value: String,
    error: ContactValidationError,
) -> Result<String, ContactValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

/// Input for creating a contact, with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    email: Option<String>,
    phone: String,
    gender: Gender,
    age_group: String,
    date_of_birth: Option<NaiveDate>,
    civil_status: String,
    place_of_work: Option<String>,
    group_id: GroupId,
    role: String,
    country: String,
    district: String,
    free_form: Option<String>,
}

/// Raw parts accepted by [`NewContact::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactParts {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: Option<String>,
    /// Mobile phone number.
    pub phone: String,
    /// Recorded gender.
    pub gender: Gender,
    /// Age bracket; defaults to `20-30`.
    pub age_group: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Civil status; defaults to `Single`.
    pub civil_status: Option<String>,
    /// Workplace.
    pub place_of_work: Option<String>,
    /// Primary group.
    pub group_id: GroupId,
    /// Role; defaults to `Member`.
    pub role: Option<String>,
    /// Country; defaults to `Uganda`.
    pub country: Option<String>,
    /// District; defaults to `Kampala`.
    pub district: Option<String>,
    /// Free-form street address.
    pub free_form: Option<String>,
}

impl NewContact {
    /// Validate names and phone, and fill in defaults for optional fields.
    pub fn try_from_parts(parts: NewContactParts) -> Result<Self, ContactValidationError> {
        let first_name = required_name(parts.first_name, ContactValidationError::EmptyFirstName)?;
        let last_name = required_name(parts.last_name, ContactValidationError::EmptyLastName)?;
        let phone = parts.phone.trim().to_owned();
        if phone.is_empty() {
            return Err(ContactValidationError::EmptyPhone);
        }
        Ok(Self {
            first_name,
            last_name,
            email: parts
                .email
                .map(|email| email.trim().to_owned())
                .filter(|email| !email.is_empty()),
            phone,
            gender: parts.gender,
            age_group: parts.age_group.unwrap_or_else(|| "20-30".to_owned()),
            date_of_birth: parts.date_of_birth,
            civil_status: parts.civil_status.unwrap_or_else(|| "Single".to_owned()),
            place_of_work: parts.place_of_work,
            group_id: parts.group_id,
            role: parts.role.unwrap_or_else(|| "Member".to_owned()),
            country: parts.country.unwrap_or_else(|| "Uganda".to_owned()),
            district: parts.district.unwrap_or_else(|| "Kampala".to_owned()),
            free_form: parts.free_form,
        })
    }

    /// Primary group of the new contact.
    #[must_use]
    pub const fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// Attach the identifier assigned by the repository.
    #[must_use]
    pub fn into_contact(self, id: u32) -> Contact {
        Contact {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            age_group: self.age_group,
            date_of_birth: self.date_of_birth,
            civil_status: self.civil_status,
            place_of_work: self.place_of_work,
            group_id: self.group_id,
            role: self.role,
            country: self.country,
            district: self.district,
            free_form: self.free_form,
        }
    }
}

/// Partial update of a contact's person fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New gender.
    pub gender: Option<Gender>,
    /// New age bracket.
    pub age_group: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// New civil status.
    pub civil_status: Option<String>,
    /// New workplace.
    pub place_of_work: Option<String>,
}

/// Filter for listing contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    /// Case-insensitive substring of first name, last name, or email.
    pub search: Option<String>,
    /// Only members of this group.
    pub group_id: Option<GroupId>,
}

impl ContactQuery {
    /// Whether `contact` passes the filter.
    #[must_use]
    pub fn matches(&self, contact: &Contact) -> bool {
        let group_ok = self.group_id.is_none_or(|id| contact.group_id == id);
        let search_ok = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .is_none_or(|term| {
                let needle = term.to_lowercase();
                contact.first_name.to_lowercase().contains(&needle)
                    || contact.last_name.to_lowercase().contains(&needle)
                    || contact
                        .email
                        .as_deref()
                        .is_some_and(|email| email.to_lowercase().contains(&needle))
            });
        group_ok && search_ok
    }
}
