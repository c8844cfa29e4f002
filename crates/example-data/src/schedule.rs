//! Deterministic report submission history.
//!
//! Recurring reports are generated week by week, walking back from an anchor
//! instant. Each group skips some weeks at random so that the dataset shows
//! both up-to-date and overdue groups.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};

use crate::generator::pick;
use crate::registry::SeedDefinition;
use crate::seed::{ExampleSubmissionSeed, SubmitterSeed};

const HOST_HOMES: &[&str] = &[
    "Emmanuel's home",
    "Sarah's home",
    "David's home",
    "Grace's home",
];
const STREAM_PLATFORMS: &[&str] = &["YouTube Live", "Facebook", "Did not stream"];
const FEEDBACK: &[&str] = &[
    "Great fellowship time with deep discussions",
    "Powerful worship and prayer time",
    "Good engagement from everyone present",
    "Meaningful connections made",
];
const SERMON_TOPICS: &[&str] = &[
    "Walking in Faith",
    "The Power of Prayer",
    "Living with Purpose",
    "Grace and Mercy",
    "Kingdom Perspective",
];

/// Recurring report shapes the generator knows how to fill in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTemplate {
    /// Weekly missional community attendance, filed by fellowships.
    McAttendance,
    /// Weekly Sunday service report, filed by locations.
    SundayService,
}

impl ReportTemplate {
    /// Identifier of the report definition this template fills in.
    #[must_use]
    pub const fn report_id(self) -> u32 {
        match self {
            Self::McAttendance => 1,
            Self::SundayService => 2,
        }
    }

    const fn stream(self) -> u64 {
        match self {
            Self::McAttendance => 0x6d63_6174,
            Self::SundayService => 0x7375_6e64,
        }
    }
}

/// One group's reporting behaviour for a recurring report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledGroup {
    /// Group filing the report.
    pub group_id: u32,
    /// Group name copied into the report data.
    pub group_name: String,
    /// Member count used to derive attendance figures.
    pub member_count: u32,
    /// Who files the report.
    pub submitter: SubmitterSeed,
    /// Number of weeks of history, counting the current week.
    pub weeks: u32,
    /// Chance (0–100) that the group filed in any given week.
    pub submission_percent: u32,
}

/// Returns the Monday of the week that lies `weeks_ago` weeks before `anchor`.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use example_data::monday_of_week;
///
/// // 2025-06-12 is a Thursday.
/// let anchor = Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap();
/// assert_eq!(monday_of_week(anchor, 0), NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
/// assert_eq!(monday_of_week(anchor, 1), NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
/// ```
#[must_use]
pub fn monday_of_week(anchor: DateTime<Utc>, weeks_ago: u32) -> NaiveDate {
    let today = anchor.date_naive();
    let shifted = today
        .checked_sub_days(Days::new(u64::from(weeks_ago) * 7))
        .unwrap_or(today);
    let since_monday = u64::from(shifted.weekday().num_days_from_monday());
    shifted
        .checked_sub_days(Days::new(since_monday))
        .unwrap_or(shifted)
}

/// Generates weekly submissions for every scheduled group.
///
/// Identifiers are assigned sequentially from `first_id`. Only submissions
/// from the current week stay editable. Filing times never lie after
/// `anchor`.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use example_data::{
///     ReportTemplate, ScheduledGroup, SeedDefinition, SubmitterSeed,
///     generate_submission_history,
/// };
///
/// let anchor = Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0).unwrap();
/// let groups = vec![ScheduledGroup {
///     group_id: 100,
///     group_name: "Phase MC".to_owned(),
///     member_count: 8,
///     submitter: SubmitterSeed { id: 1, name: "Emmanuel Okello".to_owned() },
///     weeks: 4,
///     submission_percent: 100,
/// }];
///
/// let history = generate_submission_history(
///     &SeedDefinition::new("doc", 1),
///     ReportTemplate::McAttendance,
///     &groups,
///     anchor,
///     1,
/// );
/// assert_eq!(history.len(), 4);
/// assert!(history.iter().all(|s| s.submitted_at <= anchor));
/// ```
#[must_use]
pub fn generate_submission_history(
    seed_def: &SeedDefinition,
    template: ReportTemplate,
    groups: &[ScheduledGroup],
    anchor: DateTime<Utc>,
    first_id: u64,
) -> Vec<ExampleSubmissionSeed> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed() ^ template.stream());
    let mut submissions = Vec::new();
    let mut next_id = first_id;

    for group in groups {
        for week in 0..group.weeks {
            if !rng.random_ratio(group.submission_percent.min(100), 100) {
                continue;
            }
            let monday = monday_of_week(anchor, week);
            let (filed_on, data) = match template {
                ReportTemplate::McAttendance => mc_attendance(&mut rng, group, monday),
                ReportTemplate::SundayService => sunday_service(&mut rng, monday),
            };
            let submitted_at = filed_on
                .and_hms_opt(20, 0, 0)
                .map_or(anchor, |at| at.and_utc())
                .min(anchor);

            submissions.push(ExampleSubmissionSeed {
                id: next_id,
                report_id: template.report_id(),
                group_id: group.group_id,
                submitted_at,
                submitted_by: group.submitter.clone(),
                data,
                can_edit: week == 0,
            });
            next_id = next_id.saturating_add(1);
        }
    }

    submissions
}

fn mc_attendance(
    rng: &mut ChaCha8Rng,
    group: &ScheduledGroup,
    monday: NaiveDate,
) -> (NaiveDate, Value) {
    let attendance_percent = rng.random_range(70..=95_u32);
    let attendance = (group.member_count * attendance_percent).div_euclid(100);
    let visitors = if rng.random_ratio(3, 10) {
        rng.random_range(0..3_u32)
    } else {
        0
    };
    let delay = rng.random_range(0..3_u64);
    let filed_on = monday.checked_add_days(Days::new(delay)).unwrap_or(monday);

    let data = json!({
        "date": monday.to_string(),
        "smallGroupName": group.group_name,
        "smallGroupId": group.group_id,
        "mcHostHome": pick(rng, HOST_HOMES),
        "smallGroupNumberOfMembers": group.member_count,
        "mcStreamPlatform": pick(rng, STREAM_PLATFORMS),
        "smallGroupAttendanceCount": attendance,
        "mcAttendeeNames": format!("{attendance} members attended"),
        "mcVisitorsNames": if visitors > 0 { format!("{visitors} visitors") } else { "No visitors".to_owned() },
        "mcGeneralFeedback": pick(rng, FEEDBACK),
        "mcTestimonies": if rng.random_bool(0.5) { "Member testified of answered prayer" } else { "" },
        "mcPrayerRequest": "Pray for upcoming outreach and unity in the group",
    });
    (filed_on, data)
}

fn sunday_service(rng: &mut ChaCha8Rng, monday: NaiveDate) -> (NaiveDate, Value) {
    let total = rng.random_range(150..350_u32);
    let children = total.div_euclid(4);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    let filed_on = sunday.checked_add_days(Days::new(1)).unwrap_or(sunday);

    let data = json!({
        "serviceDate": sunday.to_string(),
        "serviceType": "First Service",
        "totalAttendance": total,
        "adultsCount": total - children,
        "childrenCount": children,
        "firstTimeVisitors": rng.random_range(0..15_u32),
        "offering": rng.random_range(500_000..2_000_000_u64),
        "sermonTopic": pick(rng, SERMON_TOPICS),
    });
    (filed_on, data)
}
