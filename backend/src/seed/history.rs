//! Report submission history.

use chrono::{DateTime, TimeDelta, Utc};
use example_data::{
    ExampleSubmissionSeed, ReportTemplate, ScheduledGroup, SeedDefinition, SubmitterSeed,
    generate_submission_history, monday_of_week,
};
use serde_json::json;

use super::reports::{BAPTISM, SALVATION};
use crate::domain::{Contact, GroupId, GroupStore, Report, ReportId, Submission, Submitter};

const SERVICE_HISTORY_FIRST_ID: u64 = 1000;

/// `(fellowships, weeks of history, submission percent)` per city.
const MC_SCHEDULES: &[(&[u32], u32, u32)] = &[
    (&[100, 101, 102, 103, 104, 105, 106, 107, 110], 8, 80),
    (&[120, 121, 122], 4, 70),
    (&[128, 129, 132], 6, 75),
    (&[140, 141], 3, 60),
];

/// `(location, pastor id, pastor name)` for Sunday service history.
const SERVICE_SCHEDULES: &[(u32, u32, &str)] = &[
    (10, 153, "Location Pastor"),
    (11, 154, "Kigali Pastor"),
    (12, 155, "Nairobi Pastor"),
    (13, 156, "Berlin Pastor"),
];

struct Lookup<'a> {
    groups: &'a GroupStore,
    contacts: &'a [Contact],
    reports: &'a [Report],
}

impl Lookup<'_> {
    fn group_name(&self, id: u32) -> String {
        self.groups
            .get_by_id(GroupId::new(id))
            .map_or_else(|_| "Unknown".to_owned(), |group| group.name.clone())
    }

    fn member_count(&self, id: u32) -> u32 {
        self.groups
            .get_by_id(GroupId::new(id))
            .map_or(0, |group| group.member_count)
    }

    fn report_name(&self, id: ReportId) -> String {
        self.reports
            .iter()
            .find(|report| report.id == id)
            .map_or_else(|| "Unknown".to_owned(), |report| report.name.clone())
    }

    fn leader_of(&self, group: u32) -> SubmitterSeed {
        self.contacts
            .iter()
            .find(|contact| contact.group_id == GroupId::new(group) && contact.role == "Leader")
            .map_or_else(
                || SubmitterSeed {
                    id: 0,
                    name: "Fellowship Leader".to_owned(),
                },
                |contact| SubmitterSeed {
                    id: contact.id,
                    name: contact.full_name(),
                },
            )
    }

    fn convert(&self, seed: ExampleSubmissionSeed) -> Submission {
        let report_id = ReportId::new(seed.report_id);
        Submission {
            id: seed.id,
            report_id,
            report_name: self.report_name(report_id),
            group_id: GroupId::new(seed.group_id),
            group_name: self.group_name(seed.group_id),
            submitted_at: seed.submitted_at,
            submitted_by: Submitter {
                id: seed.submitted_by.id,
                name: seed.submitted_by.name,
            },
            data: seed.data,
            can_edit: seed.can_edit,
        }
    }
}

fn weeks_ago(now: DateTime<Utc>, weeks: i64) -> DateTime<Utc> {
    now - TimeDelta::weeks(weeks)
}

/// Build the full submission history anchored at `now`.
///
/// Recurring attendance and service reports are generated; the sporadic
/// baptism and salvation reports are fixed.
pub(super) fn submissions(
    seed: &SeedDefinition,
    groups: &GroupStore,
    contacts: &[Contact],
    reports: &[Report],
    now: DateTime<Utc>,
) -> Vec<Submission> {
    let lookup = Lookup {
        groups,
        contacts,
        reports,
    };

    let mc_groups: Vec<ScheduledGroup> = MC_SCHEDULES
        .iter()
        .flat_map(|&(ids, weeks, percent)| {
            ids.iter().map(move |&id| (id, weeks, percent))
        })
        .map(|(id, weeks, submission_percent)| ScheduledGroup {
            group_id: id,
            group_name: lookup.group_name(id),
            member_count: lookup.member_count(id),
            submitter: lookup.leader_of(id),
            weeks,
            submission_percent,
        })
        .collect();
    let service_groups: Vec<ScheduledGroup> = SERVICE_SCHEDULES
        .iter()
        .map(|&(id, pastor_id, pastor)| ScheduledGroup {
            group_id: id,
            group_name: lookup.group_name(id),
            member_count: lookup.member_count(id),
            submitter: SubmitterSeed {
                id: pastor_id,
                name: pastor.to_owned(),
            },
            weeks: 8,
            submission_percent: 90,
        })
        .collect();

    let mut history: Vec<Submission> =
        generate_submission_history(seed, ReportTemplate::McAttendance, &mc_groups, now, 1)
            .into_iter()
            .chain(generate_submission_history(
                seed,
                ReportTemplate::SundayService,
                &service_groups,
                now,
                SERVICE_HISTORY_FIRST_ID,
            ))
            .map(|submission| lookup.convert(submission))
            .collect();

    history.extend(baptisms(&lookup, now));
    history.extend(salvations(&lookup, now));
    history
}

fn baptisms(lookup: &Lookup<'_>, now: DateTime<Utc>) -> [Submission; 2] {
    [
        lookup.convert(ExampleSubmissionSeed {
            id: 2000,
            report_id: BAPTISM.get(),
            group_id: 10,
            submitted_at: weeks_ago(now, 2),
            submitted_by: SubmitterSeed {
                id: 153,
                name: "Location Pastor".to_owned(),
            },
            data: json!({
                "baptismDate": monday_of_week(now, 2).to_string(),
                "numberOfBaptisms": 5,
                "baptizedNames": "John Doe, Jane Smith, Peter Okello, Mary Nakato, David Wasswa",
                "baptismLocation": "Kampala Church Building",
                "officiatingMinister": "Pastor Emmanuel",
                "baptismNotes": "Powerful baptism service with testimonies shared",
            }),
            can_edit: false,
        }),
        lookup.convert(ExampleSubmissionSeed {
            id: 2001,
            report_id: BAPTISM.get(),
            group_id: 11,
            submitted_at: weeks_ago(now, 4),
            submitted_by: SubmitterSeed {
                id: 154,
                name: "Kigali Pastor".to_owned(),
            },
            data: json!({
                "baptismDate": monday_of_week(now, 4).to_string(),
                "numberOfBaptisms": 3,
                "baptizedNames": "Jean Baptiste, Marie Claire, Patrick Niyonzima",
                "baptismLocation": "Lake Kivu",
                "officiatingMinister": "Pastor Jean",
                "baptismNotes": "Outdoor baptism at the lake",
            }),
            can_edit: false,
        }),
    ]
}

fn salvations(lookup: &Lookup<'_>, now: DateTime<Utc>) -> [Submission; 2] {
    [
        lookup.convert(ExampleSubmissionSeed {
            id: 3000,
            report_id: SALVATION.get(),
            group_id: 100,
            submitted_at: weeks_ago(now, 1),
            submitted_by: lookup.leader_of(100),
            data: json!({
                "salvationDate": monday_of_week(now, 1).to_string(),
                "numberOfSalvations": 2,
                "savedNames": "Alice Namugga, Bob Kizza",
                "salvationContext": "MC Meeting",
                "followUpPlan": "Connect with discipleship team, assign mentors",
            }),
            can_edit: true,
        }),
        lookup.convert(ExampleSubmissionSeed {
            id: 3001,
            report_id: SALVATION.get(),
            group_id: 128,
            submitted_at: weeks_ago(now, 3),
            submitted_by: lookup.leader_of(128),
            data: json!({
                "salvationDate": monday_of_week(now, 3).to_string(),
                "numberOfSalvations": 1,
                "savedNames": "Stephen Mwangi",
                "salvationContext": "Personal Evangelism",
                "followUpPlan": "Weekly follow-up meetings scheduled",
            }),
            can_edit: false,
        }),
    ]
}
