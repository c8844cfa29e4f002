//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed church-management model served by the
//! API: the group hierarchy, access scoping, contacts, reports, submissions
//! and user accounts. Types carry their invariants in constructors and
//! document their serde contracts in Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - GroupStore: read-only hierarchy lookups.
//! - AccessScope with `filter_visible`, `filter_manageable` and
//!   `compute_overdue_status`.
//! - Contact, Report, Submission and User aggregates.

pub mod access;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod error;
pub mod group;
pub mod hierarchy;
pub mod ports;
pub mod report;
pub mod search;
pub mod trace_id;
pub mod user;

pub use self::access::{
    AccessScope, AccessScopeError, OverdueStatus, REPORTING_PERIOD_DAYS, ReportStatus,
    ScopedByGroup, TeamSummary, compute_overdue_status, filter_manageable, filter_visible,
    newest_first, reporting_period, team_report_summary,
};
pub use self::auth::{
    LoginCredentials, LoginValidationError, TOKEN_TTL_SECONDS, TokenPair, user_id_from_refresh_token,
    user_id_from_token,
};
pub use self::contact::{
    Contact, ContactPatch, ContactQuery, ContactValidationError, Gender, NewContact,
    NewContactParts,
};
pub use self::dashboard::{AttendanceTrend, attendance_change, attendance_trend};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::group::{Address, Group, GroupId, GroupType, UnknownGroupType};
pub use self::hierarchy::{GroupStore, HierarchyError};
pub use self::report::{
    NewSubmission, Report, ReportField, ReportId, Submission, SubmissionFilter,
    SubmissionFrequency, Submitter,
};
pub use self::search::{
    DEFAULT_SEARCH_LIMIT, SearchKind, UnknownSearchKind, search_contacts, search_groups,
};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId, UserParts, UserPatch, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use zoe_api::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
