//! Week-over-week attendance figures for the leader dashboard.

use chrono::{DateTime, Utc};

use super::access::newest_first;
use super::report::Submission;

const ATTENDANCE_FIELD: &str = "smallGroupAttendanceCount";

/// Attendance from the two newest attendance submissions of a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceTrend {
    /// Attendance in the newest submission, 0 when absent.
    pub this_week: u64,
    /// Attendance in the submission before that, 0 when absent.
    pub last_week: u64,
    /// Percentage change rounded to one decimal; 0 unless both weeks
    /// recorded attendance.
    pub attendance_change: f64,
    /// Filing time of the newest submission.
    pub last_submitted_at: Option<DateTime<Utc>>,
}

/// Compute the trend from a group's submissions, in any order.
///
/// # Examples
/// ```
/// use zoe_api::domain::attendance_change;
///
/// assert_eq!(attendance_change(6, 5), 20.0);
/// assert_eq!(attendance_change(6, 0), 0.0);
/// ```
#[must_use]
pub fn attendance_trend<'a, I>(submissions: I) -> AttendanceTrend
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut ordered: Vec<&Submission> = submissions.into_iter().collect();
    ordered.sort_by(|a, b| newest_first(a, b));
    let mut newest = ordered.into_iter();
    let this = newest.next();
    let last = newest.next();

    let this_week = this.map_or(0, attendance_of);
    let last_week = last.map_or(0, attendance_of);
    AttendanceTrend {
        this_week,
        last_week,
        attendance_change: attendance_change(this_week, last_week),
        last_submitted_at: this.map(|submission| submission.submitted_at),
    }
}

/// Percentage change from `last` to `this`, rounded to one decimal.
#[must_use]
pub fn attendance_change(this: u64, last: u64) -> f64 {
    if this == 0 || last == 0 {
        return 0.0;
    }
    let change = (this as f64 - last as f64) / last as f64 * 100.0;
    (change * 10.0).round() / 10.0
}

fn attendance_of(submission: &Submission) -> u64 {
    submission
        .data
        .get(ATTENDANCE_FIELD)
        .and_then(serde_json::Value::as_u64)
        .unwrap_or(0)
}
