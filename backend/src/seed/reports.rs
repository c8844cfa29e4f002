//! Report definitions.

use crate::domain::{GroupType, Report, ReportField, ReportId, SubmissionFrequency};

/// Weekly missional community attendance.
pub const MC_ATTENDANCE: ReportId = ReportId::new(1);
/// Weekly Sunday service report.
pub const SUNDAY_SERVICE: ReportId = ReportId::new(2);
/// Baptism events.
pub const BAPTISM: ReportId = ReportId::new(3);
/// Salvation events.
pub const SALVATION: ReportId = ReportId::new(4);

fn field(name: &str, label: &str, field_type: &str, required: bool) -> ReportField {
    ReportField {
        name: name.to_owned(),
        label: label.to_owned(),
        field_type: field_type.to_owned(),
        required,
    }
}

fn report(
    id: ReportId,
    name: &str,
    description: &str,
    submission_frequency: SubmissionFrequency,
    target_group_category: GroupType,
    fields: Vec<ReportField>,
) -> Report {
    Report {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        submission_frequency,
        active: true,
        status: "active".to_owned(),
        target_group_category,
        fields,
    }
}

/// The four fixed reports, in id order.
#[must_use]
pub fn report_definitions() -> Vec<Report> {
    vec![
        report(
            MC_ATTENDANCE,
            "MC Attendance Report",
            "Weekly attendance and feedback for a missional community",
            SubmissionFrequency::Weekly,
            GroupType::Fellowship,
            vec![
                field("date", "Meeting date", "date", true),
                field("smallGroupName", "MC name", "text", true),
                field("smallGroupId", "MC id", "number", true),
                field("mcHostHome", "Host home", "text", false),
                field("smallGroupNumberOfMembers", "Number of members", "number", true),
                field("mcStreamPlatform", "Streaming platform", "select", false),
                field("smallGroupAttendanceCount", "Attendance", "number", true),
                field("mcAttendeeNames", "Attendees", "textarea", false),
                field("mcVisitorsNames", "Visitors", "textarea", false),
                field("mcGeneralFeedback", "General feedback", "textarea", false),
                field("mcTestimonies", "Testimonies", "textarea", false),
                field("mcPrayerRequest", "Prayer requests", "textarea", false),
            ],
        ),
        report(
            SUNDAY_SERVICE,
            "Sunday Service Report",
            "Weekly attendance and offering for a location's Sunday service",
            SubmissionFrequency::Weekly,
            GroupType::Location,
            vec![
                field("serviceDate", "Service date", "date", true),
                field("serviceType", "Service type", "select", true),
                field("totalAttendance", "Total attendance", "number", true),
                field("adultsCount", "Adults", "number", false),
                field("childrenCount", "Children", "number", false),
                field("firstTimeVisitors", "First-time visitors", "number", false),
                field("offering", "Offering", "number", false),
                field("sermonTopic", "Sermon topic", "text", false),
            ],
        ),
        report(
            BAPTISM,
            "Baptism Report",
            "Record of a baptism service",
            SubmissionFrequency::Adhoc,
            GroupType::Location,
            vec![
                field("baptismDate", "Baptism date", "date", true),
                field("numberOfBaptisms", "Number baptised", "number", true),
                field("baptizedNames", "Names", "textarea", false),
                field("baptismLocation", "Location", "text", false),
                field("officiatingMinister", "Officiating minister", "text", false),
                field("baptismNotes", "Notes", "textarea", false),
            ],
        ),
        report(
            SALVATION,
            "Salvation Report",
            "Record of people who gave their lives to Christ",
            SubmissionFrequency::Adhoc,
            GroupType::Fellowship,
            vec![
                field("salvationDate", "Date", "date", true),
                field("numberOfSalvations", "Number saved", "number", true),
                field("savedNames", "Names", "textarea", false),
                field("salvationContext", "Context", "select", false),
                field("followUpPlan", "Follow-up plan", "textarea", false),
            ],
        ),
    ]
}
