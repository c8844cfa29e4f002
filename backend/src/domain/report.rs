//! Report definitions and the submissions filed against them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::access::ScopedByGroup;
use super::group::{GroupId, GroupType};

/// Stable numeric report identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(u32);

impl ReportId {
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

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How often a report is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionFrequency {
    /// Once per week.
    Weekly,
    /// Once per month.
    Monthly,
    /// Whenever the event happens.
    Adhoc,
}

impl SubmissionFrequency {
    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Adhoc => "adhoc",
        }
    }
}

/// One input of a report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportField {
    /// Key used in submission data.
    pub name: String,
    /// Label shown to users.
    pub label: String,
    /// Input kind such as `number` or `date`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Whether the field must be filled in.
    pub required: bool,
}

/// A report definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Identifier.
    pub id: ReportId,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Expected cadence.
    pub submission_frequency: SubmissionFrequency,
    /// Whether the report accepts submissions.
    pub active: bool,
    /// Publication status label.
    pub status: String,
    /// Level of group expected to file the report.
    pub target_group_category: GroupType,
    /// Form fields.
    pub fields: Vec<ReportField>,
}

impl Report {
    /// Whether groups are expected to file this report on a schedule.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self.submission_frequency, SubmissionFrequency::Adhoc)
    }
}

/// Who filed a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submitter {
    /// Contact or user identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// A single report instance filed by a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Identifier, unique across all reports.
    pub id: u64,
    /// Report answered.
    pub report_id: ReportId,
    /// Report name at filing time.
    pub report_name: String,
    /// Filing group.
    pub group_id: GroupId,
    /// Group name at filing time.
    pub group_name: String,
    /// Filing instant.
    pub submitted_at: DateTime<Utc>,
    /// Filer.
    pub submitted_by: Submitter,
    /// Field values keyed by field name.
    pub data: Value,
    /// Whether the submission may still be edited.
    pub can_edit: bool,
}

impl ScopedByGroup for Submission {
    fn scope_group_id(&self) -> GroupId {
        self.group_id
    }
}

/// Input for filing a submission. Identifiers and names are filled in by
/// the repository and the caller's context.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    /// Report answered.
    pub report_id: ReportId,
    /// Report name at filing time.
    pub report_name: String,
    /// Filing group.
    pub group_id: GroupId,
    /// Group name at filing time.
    pub group_name: String,
    /// Filing instant.
    pub submitted_at: DateTime<Utc>,
    /// Filer.
    pub submitted_by: Submitter,
    /// Field values keyed by field name.
    pub data: Value,
}

impl NewSubmission {
    /// Attach an identifier. Freshly filed submissions stay editable.
    #[must_use]
    pub fn into_submission(self, id: u64) -> Submission {
        let Self {
            report_id,
            report_name,
            group_id,
            group_name,
            submitted_at,
            submitted_by,
            data,
        } = self;
        Submission {
            id,
            report_id,
            report_name,
            group_id,
            group_name,
            submitted_at,
            submitted_by,
            data,
            can_edit: true,
        }
    }
}

/// Filter for listing submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionFilter {
    /// Only submissions for this report.
    pub report_id: Option<ReportId>,
    /// Only submissions filed by this group.
    pub group_id: Option<GroupId>,
}

impl SubmissionFilter {
    /// Whether `submission` passes the filter.
    #[must_use]
    pub fn matches(&self, submission: &Submission) -> bool {
        self.report_id
            .is_none_or(|report_id| submission.report_id == report_id)
            && self
                .group_id
                .is_none_or(|group_id| submission.group_id == group_id)
    }
}
