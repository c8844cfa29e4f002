//! Authentication endpoints.
//!
//! ```text
//! POST /api/auth/login {"username":"fellowship@worshipharvest.org","password":"password123"}
//! POST /api/auth/refresh {"refreshToken":"mock_refresh_151_1718000000000"}
//! POST /api/auth/logout
//! GET /api/auth/me
//! ```
//!
//! Tokens are opaque mock strings; login also stores the user id in the
//! session cookie so later requests act as that user.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    ApiResult, Error, GroupId, LoginCredentials, LoginValidationError, TokenPair, User,
    filter_manageable, user_id_from_refresh_token,
};
use crate::inbound::http::groups::LedGroupResponse;
use crate::inbound::http::identity::CurrentUser;
use crate::inbound::http::port_errors::map_user_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::UserResponse;
use crate::inbound::http::validation::{FieldName, missing_field_error, require_text};

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "fellowship@worshipharvest.org")]
    pub username: Option<String>,
    #[schema(example = "password123")]
    pub password: Option<String>,
}

fn parse_login_request(payload: LoginRequest) -> Result<LoginCredentials, Error> {
    let username = require_text(payload.username, FieldName::new("username"))?;
    let password = require_text(payload.password, FieldName::new("password"))?;
    LoginCredentials::try_from_parts(&username, &password).map_err(|err| match err {
        LoginValidationError::EmptyUsername => missing_field_error(FieldName::new("username")),
        LoginValidationError::EmptyPassword => missing_field_error(FieldName::new("password")),
    })
}

/// Groups and scope of the signed-in user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyResponse {
    pub my_groups: Vec<LedGroupResponse>,
    pub can_manage_group_ids: Vec<u32>,
    pub can_view_group_ids: Vec<u32>,
}

/// Token pair as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    #[schema(example = "mock_jwt_151_1718000000000")]
    pub token: String,
    #[schema(example = "mock_refresh_151_1718000000000")]
    pub refresh_token: String,
    /// Seconds until the access token expires.
    #[schema(example = 604_800)]
    pub expires_in: u64,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            token: pair.token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
        }
    }
}

/// Successful login payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(flatten)]
    pub tokens: TokenResponse,
    pub user: UserResponse,
    pub hierarchy: HierarchyResponse,
}

fn raw_ids(ids: &[GroupId]) -> Vec<u32> {
    ids.iter().map(|id| id.get()).collect()
}

fn hierarchy_for(state: &HttpState, user: &User) -> HierarchyResponse {
    HierarchyResponse {
        my_groups: filter_manageable(state.groups.groups(), &user.scope)
            .into_iter()
            .map(LedGroupResponse::from)
            .collect(),
        can_manage_group_ids: raw_ids(user.scope.manage_group_ids()),
        can_view_group_ids: raw_ids(user.scope.view_group_ids()),
    }
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Missing username or password", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = parse_login_request(payload.into_inner())?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(user.id)?;
    let tokens = TokenPair::issue(user.id, state.now());
    Ok(HttpResponse::Ok().json(LoginResponse {
        tokens: tokens.into(),
        user: UserResponse::from(&user),
        hierarchy: hierarchy_for(&state, &user),
    }))
}

/// Optional body for `POST /api/auth/refresh`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Issue a fresh token pair.
///
/// A supplied refresh token names the user; without one the pair is issued
/// for the user the request acts as.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    request_body(content = Option<RefreshRequest>, description = "Refresh token, optional"),
    responses(
        (status = 200, description = "New tokens", body = TokenResponse),
        (status = 401, description = "Refresh token does not name a user", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "refreshToken"
)]
#[post("/auth/refresh")]
pub async fn refresh(
    state: web::Data<HttpState>,
    current: CurrentUser,
    payload: Option<web::Json<RefreshRequest>>,
) -> ApiResult<HttpResponse> {
    let refresh_token = payload.and_then(|body| body.into_inner().refresh_token);
    let user_id = match refresh_token {
        Some(token) => {
            let id = user_id_from_refresh_token(&token)
                .ok_or_else(|| Error::unauthorized("invalid refresh token"))?;
            state
                .users
                .find(id)
                .await
                .map_err(map_user_error)?
                .ok_or_else(|| Error::unauthorized("invalid refresh token"))?
                .id
        }
        None => current.into_inner().id,
    };
    let tokens: TokenResponse = TokenPair::issue(user_id, state.now()).into();
    Ok(HttpResponse::Ok().json(tokens))
}

/// End the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// The account the request acts as.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Current user", body = UserResponse)),
    tags = ["auth"],
    operation_id = "currentUser"
)]
#[get("/auth/me")]
pub async fn me(user: CurrentUser) -> ApiResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(UserResponse::from(&user.into_inner())))
}
