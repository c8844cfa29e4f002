//! Access scoping and reporting status.
//!
//! A user's [`AccessScope`] lists the groups they may manage and the groups
//! they may view. Collections of anything that belongs to a group are
//! narrowed with [`filter_visible`] and [`filter_manageable`]. Overdue
//! status for recurring reports is derived from the newest submission.

use std::cmp::Ordering;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use super::group::{Group, GroupId};
use super::report::Submission;

/// Expected gap, in days, between two recurring submissions.
pub const REPORTING_PERIOD_DAYS: i64 = 7;

/// [`REPORTING_PERIOD_DAYS`] as a duration.
#[must_use]
pub fn reporting_period() -> TimeDelta {
    TimeDelta::days(REPORTING_PERIOD_DAYS)
}

/// Anything that belongs to exactly one group for access purposes.
pub trait ScopedByGroup {
    /// Group that governs access to this item.
    fn scope_group_id(&self) -> GroupId;
}

impl<T: ScopedByGroup + ?Sized> ScopedByGroup for &T {
    fn scope_group_id(&self) -> GroupId {
        (**self).scope_group_id()
    }
}

impl ScopedByGroup for Group {
    fn scope_group_id(&self) -> GroupId {
        self.id
    }
}

/// Validation errors for [`AccessScope`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessScopeError {
    /// Some managed groups are not viewable.
    #[error("managed groups must also be viewable: {missing:?}")]
    ManageNotViewable {
        /// Managed ids absent from the view list.
        missing: Vec<GroupId>,
    },
}

/// Groups a user may manage and view. Managed groups are always viewable.
///
/// # Examples
/// ```
/// use zoe_api::domain::{AccessScope, GroupId};
///
/// let scope = AccessScope::new(
///     vec![GroupId::new(100)],
///     vec![GroupId::new(100), GroupId::new(20)],
/// )
/// .expect("manage is a subset of view");
/// assert!(scope.can_view(GroupId::new(20)));
/// assert!(!scope.can_manage(GroupId::new(20)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessScope {
    manage: Vec<GroupId>,
    view: Vec<GroupId>,
}

impl AccessScope {
    /// Build a scope, keeping the caller's order and dropping repeats.
    pub fn new(manage: Vec<GroupId>, view: Vec<GroupId>) -> Result<Self, AccessScopeError> {
        let manage = dedup(manage);
        let view = dedup(view);
        let missing: Vec<GroupId> = manage
            .iter()
            .filter(|id| !view.contains(id))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AccessScopeError::ManageNotViewable { missing });
        }
        Ok(Self { manage, view })
    }

    /// Managed group ids in declaration order.
    #[must_use]
    pub fn manage_group_ids(&self) -> &[GroupId] {
        &self.manage
    }

    /// Viewable group ids in declaration order.
    #[must_use]
    pub fn view_group_ids(&self) -> &[GroupId] {
        &self.view
    }

    /// Whether `id` is listed as manageable.
    #[must_use]
    pub fn can_manage(&self, id: GroupId) -> bool {
        self.manage.contains(&id)
    }

    /// Whether `id` is listed as viewable.
    #[must_use]
    pub fn can_view(&self, id: GroupId) -> bool {
        self.view.contains(&id)
    }

    /// Replace every listed id with the ids `expand` returns for it.
    ///
    /// `expand` must be deterministic; the same expansion applied to both
    /// lists keeps managed groups viewable.
    #[must_use]
    pub fn expanded_with<F>(&self, expand: F) -> Self
    where
        F: Fn(GroupId) -> Vec<GroupId>,
    {
        let grow = |ids: &[GroupId]| dedup(ids.iter().flat_map(|id| expand(*id)).collect());
        Self {
            manage: grow(&self.manage),
            view: grow(&self.view),
        }
    }
}

fn dedup(ids: Vec<GroupId>) -> Vec<GroupId> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// Items whose group is viewable under `scope`, in input order.
pub fn filter_visible<T, I>(items: I, scope: &AccessScope) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: ScopedByGroup,
{
    items
        .into_iter()
        .filter(|item| scope.can_view(item.scope_group_id()))
        .collect()
}

/// Items whose group is manageable under `scope`, in input order.
pub fn filter_manageable<T, I>(items: I, scope: &AccessScope) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: ScopedByGroup,
{
    items
        .into_iter()
        .filter(|item| scope.can_manage(item.scope_group_id()))
        .collect()
}

/// Whether a group is up to date with a recurring report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// The newest submission falls inside the reporting period.
    Submitted,
    /// No submission, or the newest one is older than the period.
    Overdue,
}

/// Result of [`compute_overdue_status`].
#[derive(Debug, Clone, PartialEq)]
pub struct OverdueStatus<'a> {
    /// Derived status.
    pub status: ReportStatus,
    /// Whole days since the newest submission when overdue, otherwise 0.
    pub days_overdue: i64,
    /// The newest submission for the group, if any.
    pub last_submission: Option<&'a Submission>,
}

/// Orders submissions newest first: `submitted_at` descending, then `id`
/// descending.
#[must_use]
pub fn newest_first(a: &Submission, b: &Submission) -> Ordering {
    b.submitted_at
        .cmp(&a.submitted_at)
        .then_with(|| b.id.cmp(&a.id))
}

/// Derive the reporting status of `group` from its submissions.
///
/// Submissions for other groups are ignored. A group that never submitted is
/// overdue with `days_overdue == 0`.
pub fn compute_overdue_status<'a, I>(
    group: GroupId,
    submissions: I,
    period: TimeDelta,
    now: DateTime<Utc>,
) -> OverdueStatus<'a>
where
    I: IntoIterator<Item = &'a Submission>,
{
    let last_submission = submissions
        .into_iter()
        .filter(|submission| submission.group_id == group)
        .min_by(|a, b| newest_first(a, b));

    let Some(last) = last_submission else {
        return OverdueStatus {
            status: ReportStatus::Overdue,
            days_overdue: 0,
            last_submission: None,
        };
    };

    let elapsed = now.signed_duration_since(last.submitted_at);
    if elapsed > period {
        OverdueStatus {
            status: ReportStatus::Overdue,
            days_overdue: elapsed.num_days(),
            last_submission: Some(last),
        }
    } else {
        OverdueStatus {
            status: ReportStatus::Submitted,
            days_overdue: 0,
            last_submission: Some(last),
        }
    }
}

/// Aggregate counts for a team's reporting status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    /// Number of groups considered.
    pub total: usize,
    /// Groups that are up to date.
    pub submitted: usize,
    /// Groups that are overdue.
    pub overdue: usize,
    /// `submitted / total`, or 0 when there are no groups.
    pub submission_rate: f64,
}

/// Summarise a set of reporting statuses.
pub fn team_report_summary<I>(statuses: I) -> TeamSummary
where
    I: IntoIterator<Item = ReportStatus>,
{
    let (submitted, overdue) =
        statuses
            .into_iter()
            .fold((0_usize, 0_usize), |(submitted, overdue), status| match status {
                ReportStatus::Submitted => (submitted + 1, overdue),
                ReportStatus::Overdue => (submitted, overdue + 1),
            });
    let total = submitted + overdue;
    let submission_rate = if total == 0 {
        0.0
    } else {
        submitted as f64 / total as f64
    };
    TeamSummary {
        total,
        submitted,
        overdue,
        submission_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::{ReportId, Submitter};
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Item(u32);

    impl ScopedByGroup for Item {
        fn scope_group_id(&self) -> GroupId {
            GroupId::new(self.0)
        }
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 12, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn scope() -> AccessScope {
        AccessScope::new(
            vec![GroupId::new(100)],
            vec![GroupId::new(100), GroupId::new(20)],
        )
        .expect("valid scope")
    }

    fn submission(id: u64, group: u32, submitted_at: DateTime<Utc>) -> Submission {
        Submission {
            id,
            report_id: ReportId::new(1),
            report_name: "MC Attendance Report".to_owned(),
            group_id: GroupId::new(group),
            group_name: "Phase MC".to_owned(),
            submitted_at,
            submitted_by: Submitter {
                id: 1,
                name: "Emmanuel Okello".to_owned(),
            },
            data: json!({}),
            can_edit: false,
        }
    }

    #[rstest]
    fn filter_visible_keeps_exactly_viewable_items(scope: AccessScope) {
        let items = [Item(100), Item(101), Item(20), Item(10)];
        let visible = filter_visible(items, &scope);
        assert_eq!(visible, vec![Item(100), Item(20)]);
        assert_eq!(filter_visible(visible.clone(), &scope), visible);
    }

    #[rstest]
    fn filter_manageable_is_idempotent_subset(scope: AccessScope) {
        let items = [Item(100), Item(20), Item(100)];
        let manageable = filter_manageable(&items, &scope);
        assert_eq!(manageable, vec![&Item(100), &Item(100)]);
        assert_eq!(filter_manageable(manageable.clone(), &scope), manageable);
    }

    #[rstest]
    fn scope_rejects_manage_outside_view() {
        let result = AccessScope::new(vec![GroupId::new(100)], vec![GroupId::new(20)]);
        assert_eq!(
            result,
            Err(AccessScopeError::ManageNotViewable {
                missing: vec![GroupId::new(100)]
            })
        );
    }

    #[rstest]
    fn expansion_keeps_managed_groups_viewable(scope: AccessScope) {
        let expanded = scope.expanded_with(|id| vec![id, GroupId::new(id.get() + 1)]);
        assert_eq!(
            expanded.manage_group_ids(),
            &[GroupId::new(100), GroupId::new(101)]
        );
        assert!(
            expanded
                .manage_group_ids()
                .iter()
                .all(|id| expanded.can_view(*id))
        );
        assert!(expanded.can_view(GroupId::new(21)));
    }

    #[rstest]
    fn scope_drops_repeated_ids() {
        let scope = AccessScope::new(
            vec![GroupId::new(1), GroupId::new(1)],
            vec![GroupId::new(1), GroupId::new(2), GroupId::new(1)],
        )
        .expect("valid scope");
        assert_eq!(scope.manage_group_ids(), &[GroupId::new(1)]);
        assert_eq!(scope.view_group_ids(), &[GroupId::new(1), GroupId::new(2)]);
    }

    #[rstest]
    #[case::eight_days(8, ReportStatus::Overdue, 8)]
    #[case::three_days(3, ReportStatus::Submitted, 0)]
    #[case::exactly_a_week(7, ReportStatus::Submitted, 0)]
    fn overdue_status_follows_period(
        now: DateTime<Utc>,
        #[case] days_ago: i64,
        #[case] status: ReportStatus,
        #[case] days_overdue: i64,
    ) {
        let submissions = [submission(1, 100, now - TimeDelta::days(days_ago))];
        let result = compute_overdue_status(
            GroupId::new(100),
            &submissions,
            reporting_period(),
            now,
        );
        assert_eq!(result.status, status);
        assert_eq!(result.days_overdue, days_overdue);
        assert_eq!(result.last_submission.map(|s| s.id), Some(1));
    }

    #[rstest]
    fn never_submitted_is_overdue_with_zero_days(now: DateTime<Utc>) {
        let submissions = [submission(1, 101, now)];
        let result = compute_overdue_status(
            GroupId::new(100),
            &submissions,
            reporting_period(),
            now,
        );
        assert_eq!(result.status, ReportStatus::Overdue);
        assert_eq!(result.days_overdue, 0);
        assert!(result.last_submission.is_none());
    }

    #[rstest]
    fn newest_submission_wins_with_id_tie_break(now: DateTime<Utc>) {
        let older = now - TimeDelta::days(10);
        let newer = now - TimeDelta::days(2);
        let submissions = [
            submission(1, 100, older),
            submission(2, 100, newer),
            submission(3, 100, newer),
        ];
        let result = compute_overdue_status(
            GroupId::new(100),
            &submissions,
            reporting_period(),
            now,
        );
        assert_eq!(result.last_submission.map(|s| s.id), Some(3));
        assert_eq!(result.status, ReportStatus::Submitted);
    }

    #[rstest]
    fn team_summary_counts_statuses() {
        let summary = team_report_summary([
            ReportStatus::Submitted,
            ReportStatus::Overdue,
            ReportStatus::Submitted,
            ReportStatus::Submitted,
        ]);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.submitted, 3);
        assert_eq!(summary.overdue, 1);
        assert!((summary.submission_rate - 0.75).abs() < f64::EPSILON);
    }

    #[rstest]
    fn team_summary_rate_is_zero_without_groups() {
        let summary = team_report_summary(std::iter::empty());
        assert_eq!(summary.total, 0);
        assert!(summary.submission_rate.abs() < f64::EPSILON);
    }
}
