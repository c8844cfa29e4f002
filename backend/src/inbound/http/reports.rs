//! Report definitions and submissions.
//!
//! ```text
//! GET /api/reports
//! GET /api/reports/1
//! POST /api/reports/1/submissions {"groupId":100,"data":{"smallGroupAttendanceCount":7}}
//! GET /api/reports/submissions/me?reportId=1&limit=20&offset=0
//! GET /api/reports/submissions/team?reportId=1
//! GET /api/reports/submissions/1001
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    ApiResult, Contact, Error, Group, GroupId, GroupType, NewSubmission, OverdueStatus, Report,
    ReportField, ReportId, ReportStatus, Submission, SubmissionFilter, Submitter, TeamSummary,
    compute_overdue_status, filter_manageable, filter_visible, reporting_period,
    team_report_summary,
};
use crate::inbound::http::groups::LEADER_ROLE;
use crate::inbound::http::identity::CurrentUser;
use crate::inbound::http::listing::{ListResponse, PaginationBody};
use crate::inbound::http::port_errors::{
    map_contact_error, map_report_error, map_submission_error,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_value_error, page_request, require};

const SUBMISSIONS_PAGE_LIMIT: usize = 20;
const DEFAULT_TEAM_REPORT: ReportId = ReportId::new(1);
const FALLBACK_LEADER_NAME: &str = "Fellowship Leader";

/// Report as listed.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[schema(example = "weekly")]
    pub submission_frequency: String,
    pub active: bool,
    pub status: String,
    #[schema(example = "fellowship")]
    pub target_group_category: String,
    pub field_count: usize,
}

impl From<Report> for ReportSummary {
    fn from(report: Report) -> Self {
        Self {
            id: report.id.get(),
            submission_frequency: frequency_label(&report),
            target_group_category: report.target_group_category.as_str().to_owned(),
            field_count: report.fields.len(),
            name: report.name,
            description: report.description,
            active: report.active,
            status: report.status,
        }
    }
}

fn frequency_label(report: &Report) -> String {
    report.submission_frequency.as_str().to_owned()
}

/// One input of a report form.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportFieldResponse {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

impl From<ReportField> for ReportFieldResponse {
    fn from(field: ReportField) -> Self {
        Self {
            name: field.name,
            label: field.label,
            field_type: field.field_type,
            required: field.required,
        }
    }
}

/// Full report definition.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub submission_frequency: String,
    pub active: bool,
    pub status: String,
    pub target_group_category: String,
    pub fields: Vec<ReportFieldResponse>,
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            id: report.id.get(),
            submission_frequency: frequency_label(&report),
            target_group_category: report.target_group_category.as_str().to_owned(),
            name: report.name,
            description: report.description,
            active: report.active,
            status: report.status,
            fields: report.fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Filer of a submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitterResponse {
    pub id: u32,
    pub name: String,
}

/// A filed report.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: u64,
    pub report_id: u32,
    pub report_name: String,
    pub group_id: u32,
    pub group_name: String,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: SubmitterResponse,
    #[schema(value_type = Object)]
    pub data: Value,
    pub can_edit: bool,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            report_id: submission.report_id.get(),
            report_name: submission.report_name,
            group_id: submission.group_id.get(),
            group_name: submission.group_name,
            submitted_at: submission.submitted_at,
            submitted_by: SubmitterResponse {
                id: submission.submitted_by.id,
                name: submission.submitted_by.name,
            },
            data: submission.data,
            can_edit: submission.can_edit,
        }
    }
}

/// Body of `POST /api/reports/{reportId}/submissions`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    #[schema(example = 100)]
    pub group_id: Option<u32>,
    /// Field values keyed by field name.
    #[schema(value_type = Object)]
    pub data: Option<Value>,
}

/// Query for `GET /api/reports/submissions/me`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct MySubmissionsQuery {
    /// Only submissions for this report.
    pub report_id: Option<u32>,
    /// Page size, default 20, max 500.
    pub limit: Option<usize>,
    /// Items to skip, default 0.
    pub offset: Option<usize>,
}

/// Query for `GET /api/reports/submissions/team`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TeamQuery {
    /// Report to check, default 1.
    pub report_id: Option<u32>,
}

/// Newest submission of a fellowship on the team report.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LastSubmission {
    pub id: u64,
    pub submitted_at: DateTime<Utc>,
    #[schema(value_type = String, example = "submitted")]
    pub status: ReportStatus,
    #[schema(value_type = Object)]
    pub data: Value,
}

/// Reporting status of one fellowship.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    pub group_id: u32,
    pub group_name: String,
    pub category_name: String,
    pub leader_name: String,
    pub report_id: u32,
    pub report_name: String,
    pub report_frequency: String,
    pub last_submission: Option<LastSubmission>,
    #[schema(value_type = String, example = "overdue")]
    pub status: ReportStatus,
    pub days_overdue: i64,
}

/// Totals across the team.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryBody {
    pub total: usize,
    pub submitted: usize,
    pub overdue: usize,
    /// Fraction of fellowships up to date, 0 to 1.
    pub submission_rate: f64,
}

impl From<TeamSummary> for TeamSummaryBody {
    fn from(summary: TeamSummary) -> Self {
        Self {
            total: summary.total,
            submitted: summary.submitted,
            overdue: summary.overdue,
            submission_rate: summary.submission_rate,
        }
    }
}

/// Team report payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamReportResponse {
    pub items: Vec<TeamEntry>,
    pub summary: TeamSummaryBody,
    pub pagination: PaginationBody,
}

async fn find_report(state: &HttpState, id: ReportId) -> ApiResult<Report> {
    state
        .reports
        .find(id)
        .await
        .map_err(map_report_error)?
        .ok_or_else(|| Error::not_found(format!("report {id} not found")))
}

fn leader_name(contacts: &[Contact], group: GroupId) -> String {
    contacts
        .iter()
        .find(|contact| contact.group_id == group && contact.role == LEADER_ROLE)
        .map_or_else(|| FALLBACK_LEADER_NAME.to_owned(), Contact::full_name)
}

fn team_entry(
    report: &Report,
    fellowship: &Group,
    leader_name: String,
    overdue: OverdueStatus<'_>,
) -> TeamEntry {
    TeamEntry {
        group_id: fellowship.id.get(),
        group_name: fellowship.name.clone(),
        category_name: fellowship.category_name().to_owned(),
        leader_name,
        report_id: report.id.get(),
        report_name: report.name.clone(),
        report_frequency: frequency_label(report),
        last_submission: overdue.last_submission.map(|last| LastSubmission {
            id: last.id,
            submitted_at: last.submitted_at,
            status: overdue.status,
            data: last.data.clone(),
        }),
        status: overdue.status,
        days_overdue: overdue.days_overdue,
    }
}

/// List report definitions.
#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "Reports", body = ListResponse<ReportSummary>),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "listReports"
)]
#[get("/reports")]
pub async fn list_reports(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let reports = state.reports.list().await.map_err(map_report_error)?;
    let body: ListResponse<ReportSummary> = Page::whole(reports).map(ReportSummary::from).into();
    Ok(HttpResponse::Ok().json(body))
}

/// Report definition with its fields.
#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(("id" = u32, Path, description = "Report identifier")),
    responses(
        (status = 200, description = "Report", body = ReportResponse),
        (status = 404, description = "Unknown report", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "getReport"
)]
#[get("/reports/{id}")]
pub async fn get_report(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<HttpResponse> {
    let report = find_report(&state, ReportId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok().json(ReportResponse::from(report)))
}

/// File a submission for a group, as the current user.
#[utoipa::path(
    post,
    path = "/api/reports/{reportId}/submissions",
    params(("reportId" = u32, Path, description = "Report identifier")),
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission filed", body = SubmissionResponse),
        (status = 400, description = "Missing group or malformed data", body = ErrorSchema),
        (status = 404, description = "Unknown report or group", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "createSubmission"
)]
#[post("/reports/{reportId}/submissions")]
pub async fn create_submission(
    state: web::Data<HttpState>,
    current: CurrentUser,
    path: web::Path<u32>,
    payload: web::Json<CreateSubmissionRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let group_id = GroupId::new(require(payload.group_id, FieldName::new("groupId"))?);
    let data = require(payload.data, FieldName::new("data"))?;
    if !data.is_object() {
        return Err(invalid_value_error(
            FieldName::new("data"),
            &data.to_string(),
            "data must be a JSON object",
        ));
    }
    let report = find_report(&state, ReportId::new(path.into_inner())).await?;
    let group = state
        .groups
        .get_by_id(group_id)
        .map_err(|_| Error::not_found(format!("group {group_id} not found")))?;
    let user = current.into_inner();
    let submission = state
        .submissions
        .create(NewSubmission {
            report_id: report.id,
            report_name: report.name,
            group_id,
            group_name: group.name.clone(),
            submitted_at: state.now(),
            submitted_by: Submitter {
                id: user.id.get(),
                name: user.full_name,
            },
            data,
        })
        .await
        .map_err(map_submission_error)?;
    Ok(HttpResponse::Created().json(SubmissionResponse::from(submission)))
}

/// Submissions visible to the current user, newest first.
///
/// Viewing a group extends to every group beneath it.
#[utoipa::path(
    get,
    path = "/api/reports/submissions/me",
    params(MySubmissionsQuery),
    responses(
        (status = 200, description = "Submissions", body = ListResponse<SubmissionResponse>),
        (status = 400, description = "Invalid page", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "listMySubmissions"
)]
#[get("/reports/submissions/me")]
pub async fn my_submissions(
    state: web::Data<HttpState>,
    current: CurrentUser,
    query: web::Query<MySubmissionsQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let page = page_request(query.limit, query.offset, SUBMISSIONS_PAGE_LIMIT)?;
    let scope = state.groups.subtree_scope(&current.into_inner().scope);
    let submissions = state
        .submissions
        .list(SubmissionFilter {
            report_id: query.report_id.map(ReportId::new),
            group_id: None,
        })
        .await
        .map_err(map_submission_error)?;
    let visible = filter_visible(submissions, &scope);
    let body: ListResponse<SubmissionResponse> =
        page.paginate(visible).map(SubmissionResponse::from).into();
    Ok(HttpResponse::Ok().json(body))
}

/// Reporting status of every fellowship the current user leads.
///
/// Managing a group extends to every fellowship beneath it. Fellowships
/// without any submission count as overdue with zero days.
#[utoipa::path(
    get,
    path = "/api/reports/submissions/team",
    params(TeamQuery),
    responses(
        (status = 200, description = "Team status", body = TeamReportResponse),
        (status = 404, description = "Unknown report", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "teamSubmissions"
)]
#[get("/reports/submissions/team")]
pub async fn team_submissions(
    state: web::Data<HttpState>,
    current: CurrentUser,
    query: web::Query<TeamQuery>,
) -> ApiResult<HttpResponse> {
    let report_id = query
        .into_inner()
        .report_id
        .map_or(DEFAULT_TEAM_REPORT, ReportId::new);
    let report = find_report(&state, report_id).await?;
    let scope = state.groups.subtree_scope(&current.into_inner().scope);
    let fellowships = filter_manageable(state.groups.by_type(GroupType::Fellowship), &scope);

    let submissions = state
        .submissions
        .list(SubmissionFilter {
            report_id: Some(report_id),
            group_id: None,
        })
        .await
        .map_err(map_submission_error)?;
    let contacts = state.contacts.all().await.map_err(map_contact_error)?;
    let now = state.now();

    let items: Vec<TeamEntry> = fellowships
        .into_iter()
        .map(|fellowship| {
            let overdue =
                compute_overdue_status(fellowship.id, &submissions, reporting_period(), now);
            team_entry(
                &report,
                fellowship,
                leader_name(&contacts, fellowship.id),
                overdue,
            )
        })
        .collect();
    let summary = team_report_summary(items.iter().map(|item| item.status));
    let page = Page::whole(items);
    Ok(HttpResponse::Ok().json(TeamReportResponse {
        items: page.items,
        summary: summary.into(),
        pagination: page.pagination.into(),
    }))
}

/// A single submission.
#[utoipa::path(
    get,
    path = "/api/reports/submissions/{id}",
    params(("id" = u64, Path, description = "Submission identifier")),
    responses(
        (status = 200, description = "Submission", body = SubmissionResponse),
        (status = 404, description = "Unknown submission", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "getSubmission"
)]
#[get("/reports/submissions/{id}")]
pub async fn get_submission(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let submission = state
        .submissions
        .find(id)
        .await
        .map_err(map_submission_error)?
        .ok_or_else(|| Error::not_found(format!("submission {id} not found")))?;
    Ok(HttpResponse::Ok().json(SubmissionResponse::from(submission)))
}
