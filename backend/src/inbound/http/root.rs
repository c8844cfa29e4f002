//! Banner and quick-start endpoints outside `/api`.
//!
//! ```text
//! GET /
//! GET /docs
//! ```

use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ApiResult, User};
use crate::inbound::http::port_errors::map_user_error;
use crate::inbound::http::state::HttpState;
use crate::seed::TEST_PASSWORD;

/// Credentials of a seeded account.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestAccount {
    #[schema(example = "fellowship@worshipharvest.org")]
    pub username: String,
    #[schema(example = "password123")]
    pub password: String,
    #[schema(example = "MC Shepherd")]
    pub role: Option<String>,
    /// Set on `/docs` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_level: Option<String>,
}

impl TestAccount {
    fn new(user: &User, with_access_level: bool) -> Self {
        Self {
            username: user.username.clone(),
            password: TEST_PASSWORD.to_owned(),
            role: user.primary_role().map(str::to_owned),
            access_level: with_access_level.then(|| user.full_name.clone()),
        }
    }
}

/// Payload of `GET /`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
    pub documentation: String,
    pub endpoints: BTreeMap<String, String>,
    pub test_users: Vec<TestAccount>,
}

/// Payload of `GET /docs`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocsResponse {
    pub message: String,
    pub base_url: String,
    pub test_accounts: Vec<TestAccount>,
}

fn endpoint_map() -> BTreeMap<String, String> {
    [
        ("auth", "/api/auth/*"),
        ("groups", "/api/groups/*"),
        ("contacts", "/api/crm/contacts/*"),
        ("reports", "/api/reports/*"),
        ("dashboard", "/api/dashboard/*"),
        ("users", "/api/users/*"),
        ("search", "/api/search"),
        ("openapi", "/api-docs/openapi.json"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_owned(), path.to_owned()))
    .collect()
}

async fn accounts(state: &HttpState, with_access_level: bool) -> ApiResult<Vec<TestAccount>> {
    let users = state.users.list().await.map_err(map_user_error)?;
    Ok(users
        .iter()
        .map(|user| TestAccount::new(user, with_access_level))
        .collect())
}

/// Service banner with the seeded test accounts.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Banner", body = BannerResponse)),
    tags = ["meta"],
    operation_id = "banner",
    security([])
)]
#[get("/")]
pub async fn banner(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(BannerResponse {
        message: "Project Zoe Mock API Server".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        documentation: "/docs".to_owned(),
        endpoints: endpoint_map(),
        test_users: accounts(&state, false).await?,
    }))
}

/// Base URL and test accounts for client developers.
#[utoipa::path(
    get,
    path = "/docs",
    responses((status = 200, description = "Quick-start details", body = DocsResponse)),
    tags = ["meta"],
    operation_id = "quickStart",
    security([])
)]
#[get("/docs")]
pub async fn quick_start(
    req: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let base_url = {
        let info = req.connection_info();
        format!("{}://{}/api", info.scheme(), info.host())
    };
    Ok(HttpResponse::Ok().json(DocsResponse {
        message: "API Documentation".to_owned(),
        base_url,
        test_accounts: accounts(&state, true).await?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{TestPorts, account};
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    fn ports() -> TestPorts {
        let mut ports = TestPorts::default();
        ports
            .users
            .expect_list()
            .returning(|| Ok(vec![account(151, &[100], &[100, 20])]));
        ports
    }

    #[actix_web::test]
    async fn banner_lists_endpoints_and_accounts() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ports().into_state()))
                .service(banner),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["endpoints"]["contacts"], "/api/crm/contacts/*");
        assert_eq!(body["testUsers"][0]["username"], "user151@worshipharvest.org");
        assert_eq!(body["testUsers"][0]["role"], "MC Shepherd");
        assert!(body["testUsers"][0].get("accessLevel").is_none());
    }

    #[actix_web::test]
    async fn docs_reports_base_url_and_access_levels() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ports().into_state()))
                .service(quick_start),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/docs").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["baseUrl"], "http://localhost:8080/api");
        assert_eq!(body["testAccounts"][0]["password"], "password123");
        assert_eq!(body["testAccounts"][0]["accessLevel"], "Test User 151");
    }
}
