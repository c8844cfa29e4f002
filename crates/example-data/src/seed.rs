//! Generated seed types and the templates that drive generation.
//!
//! These types mirror the backend's contact and submission shapes without
//! depending on them; the backend converts them at startup.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gender recorded on a generated contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderSeed {
    /// Male contact.
    Male,
    /// Female contact.
    Female,
}

impl GenderSeed {
    /// Label used by the front end.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Describes one group that should be populated with contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipTemplate {
    /// Identifier of the group the contacts belong to.
    pub group_id: u32,
    /// Number of contacts to create for the group.
    pub member_count: u32,
    /// Country recorded on each contact's home address.
    pub country: String,
    /// District recorded on each contact's home address.
    pub district: String,
}

/// A generated contact record.
///
/// The first contact generated for each group is its leader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleContactSeed {
    /// Sequential identifier, starting at 1.
    pub id: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, absent for a minority of contacts.
    pub email: Option<String>,
    /// Mobile phone number.
    pub phone: String,
    /// Recorded gender.
    pub gender: GenderSeed,
    /// Age bracket such as `20-30`.
    pub age_group: String,
    /// Date of birth when known.
    pub date_of_birth: Option<NaiveDate>,
    /// Civil status such as `Single`.
    pub civil_status: String,
    /// Employer or workplace when known.
    pub place_of_work: Option<String>,
    /// Primary group membership.
    pub group_id: u32,
    /// Role within the primary group.
    pub role: String,
    /// Home country.
    pub country: String,
    /// Home district.
    pub district: String,
}

/// Who filed a generated submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitterSeed {
    /// Contact or user identifier of the submitter.
    pub id: u32,
    /// Display name of the submitter.
    pub name: String,
}

/// A generated report submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleSubmissionSeed {
    /// Submission identifier.
    pub id: u64,
    /// Report the submission answers.
    pub report_id: u32,
    /// Group that filed the submission.
    pub group_id: u32,
    /// Filing timestamp.
    pub submitted_at: DateTime<Utc>,
    /// Submitter reference.
    pub submitted_by: SubmitterSeed,
    /// Report field values.
    pub data: Value,
    /// Whether the submission may still be edited.
    pub can_edit: bool,
}
