//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the error schemas and two security schemes: the session cookie set
//! at login and the mock bearer token returned alongside it.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for client tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie and bearer schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/auth/login.",
            ))),
        );
        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Mock token issued by POST /api/auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Project Zoe mock API",
        description = "Church management endpoints over a seeded in-memory dataset.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = []), ("BearerToken" = [])),
    paths(
        crate::inbound::http::root::banner,
        crate::inbound::http::root::quick_start,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::refresh,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::me,
        crate::inbound::http::groups::list_groups,
        crate::inbound::http::groups::my_groups,
        crate::inbound::http::groups::group_categories,
        crate::inbound::http::groups::get_group,
        crate::inbound::http::groups::group_children,
        crate::inbound::http::groups::group_members,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::reports::list_reports,
        crate::inbound::http::reports::get_report,
        crate::inbound::http::reports::create_submission,
        crate::inbound::http::reports::my_submissions,
        crate::inbound::http::reports::team_submissions,
        crate::inbound::http::reports::get_submission,
        crate::inbound::http::dashboard::dashboard_summary,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::search::search,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "meta", description = "Banner and quick-start details"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "auth", description = "Login, token refresh and session"),
        (name = "groups", description = "Organisational hierarchy"),
        (name = "contacts", description = "CRM contacts"),
        (name = "reports", description = "Report definitions and submissions"),
        (name = "dashboard", description = "Leader dashboard"),
        (name = "users", description = "User accounts and access scope"),
        (name = "search", description = "Free-text search")
    )
)]
pub struct ApiDoc;
