//! Leader dashboard.
//!
//! ```text
//! GET /api/dashboard/summary
//! ```
//!
//! Figures come from the first fellowship the current user manages.
//! Visitor and new-member counts are not recorded by any report and are
//! always zero.

use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, Error, Group, GroupType, ReportId, ReportStatus, Submission, SubmissionFilter,
    attendance_trend, compute_overdue_status, filter_manageable, reporting_period,
};
use crate::inbound::http::identity::CurrentUser;
use crate::inbound::http::port_errors::{map_report_error, map_submission_error};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::seed::{BAPTISM, MC_ATTENDANCE, SALVATION};

const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Fellowship the dashboard describes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardGroup {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "fellowship")]
    pub group_type: String,
    pub member_count: u32,
    pub active_members: u32,
}

impl From<&Group> for DashboardGroup {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.get(),
            name: group.name.clone(),
            group_type: group.group_type.as_str().to_owned(),
            member_count: group.member_count,
            active_members: group.active_members(),
        }
    }
}

/// Figures for the current reporting period.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThisWeek {
    pub attendance: u64,
    pub visitors: u64,
    pub new_members: u64,
    pub salvations: usize,
    pub baptisms: usize,
}

/// Figures for the previous reporting period.
#[derive(Debug, Serialize, ToSchema)]
pub struct LastWeek {
    pub attendance: u64,
    pub visitors: u64,
}

/// Percentage changes between the two periods.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub attendance_change: f64,
    pub visitors_change: f64,
}

/// Recurring report the fellowship is late with.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingReport {
    pub report_id: u32,
    pub report_name: String,
    pub days_overdue: i64,
}

/// Entry of the activity feed.
#[derive(Debug, Serialize, ToSchema)]
pub struct Activity {
    #[serde(rename = "type")]
    #[schema(example = "report_submitted")]
    pub kind: String,
    #[schema(example = "MC Attendance Report submitted")]
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Submission> for Activity {
    fn from(submission: &Submission) -> Self {
        Self {
            kind: "report_submitted".to_owned(),
            description: format!("{} submitted", submission.report_name),
            timestamp: submission.submitted_at,
        }
    }
}

/// Dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub group: DashboardGroup,
    pub this_week: ThisWeek,
    pub last_week: LastWeek,
    pub trend: Trend,
    pub pending_reports: Vec<PendingReport>,
    pub recent_activity: Vec<Activity>,
}

fn recent_count(
    submissions: &[Submission],
    report: ReportId,
    since: DateTime<Utc>,
) -> usize {
    submissions
        .iter()
        .filter(|submission| submission.report_id == report && submission.submitted_at >= since)
        .count()
}

/// Week-over-week summary for the current user's fellowship.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Dashboard", body = DashboardResponse),
        (status = 404, description = "User manages no fellowship", body = ErrorSchema)
    ),
    tags = ["dashboard"],
    operation_id = "dashboardSummary"
)]
#[get("/dashboard/summary")]
pub async fn dashboard_summary(
    state: web::Data<HttpState>,
    current: CurrentUser,
) -> ApiResult<HttpResponse> {
    let scope = state.groups.subtree_scope(&current.into_inner().scope);
    let fellowship = filter_manageable(state.groups.by_type(GroupType::Fellowship), &scope)
        .into_iter()
        .next()
        .ok_or_else(|| Error::not_found("no managed fellowship"))?;

    let submissions = state
        .submissions
        .list(SubmissionFilter {
            report_id: None,
            group_id: Some(fellowship.id),
        })
        .await
        .map_err(map_submission_error)?;
    let reports = state.reports.list().await.map_err(map_report_error)?;
    let now = state.now();
    let period_start = now - reporting_period();

    let trend = attendance_trend(
        submissions
            .iter()
            .filter(|submission| submission.report_id == MC_ATTENDANCE),
    );
    let pending_reports = reports
        .iter()
        .filter(|report| {
            report.is_recurring() && report.target_group_category == GroupType::Fellowship
        })
        .filter_map(|report| {
            let status = compute_overdue_status(
                fellowship.id,
                submissions
                    .iter()
                    .filter(|submission| submission.report_id == report.id),
                reporting_period(),
                now,
            );
            (status.status == ReportStatus::Overdue).then(|| PendingReport {
                report_id: report.id.get(),
                report_name: report.name.clone(),
                days_overdue: status.days_overdue,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(DashboardResponse {
        group: DashboardGroup::from(fellowship),
        this_week: ThisWeek {
            attendance: trend.this_week,
            visitors: 0,
            new_members: 0,
            salvations: recent_count(&submissions, SALVATION, period_start),
            baptisms: recent_count(&submissions, BAPTISM, period_start),
        },
        last_week: LastWeek {
            attendance: trend.last_week,
            visitors: 0,
        },
        trend: Trend {
            attendance_change: trend.attendance_change,
            visitors_change: 0.0,
        },
        pending_reports,
        recent_activity: submissions
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .map(Activity::from)
            .collect(),
    }))
}
