//! User account endpoints.
//!
//! ```text
//! GET /api/users?limit=50&offset=0
//! POST /api/users {"contactId":12,"password":"secret","manageGroupIds":[100],"viewGroupIds":[100,20]}
//! PATCH /api/users/151 {"roles":["Zone Leader"]}
//! ```

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiResult, Error, GroupId, NewUser, User, UserId, UserPatch};
use crate::inbound::http::avatar_url;
use crate::inbound::http::listing::{ListResponse, PageQuery};
use crate::inbound::http::port_errors::{map_contact_error, map_user_error};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, default_page_request, require, require_text,
};

/// Public view of an account. Never carries the password.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 151)]
    pub id: u32,
    #[schema(example = "fellowship@worshipharvest.org")]
    pub username: String,
    #[schema(example = "Emmanuel Okello")]
    pub full_name: String,
    pub email: String,
    pub avatar: String,
    pub contact_id: u32,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            avatar: avatar_url(user.id.get()),
            contact_id: user.contact_id,
            roles: user.roles.clone(),
            permissions: user.permissions.clone(),
            is_active: true,
        }
    }
}

/// Request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = 12)]
    pub contact_id: Option<u32>,
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
    pub permissions: Option<Vec<String>>,
    pub manage_group_ids: Option<Vec<u32>>,
    pub view_group_ids: Option<Vec<u32>>,
}

/// Request body for `PATCH /api/users/{id}`. Absent fields are left as they are.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
    pub permissions: Option<Vec<String>>,
    pub manage_group_ids: Option<Vec<u32>>,
    pub view_group_ids: Option<Vec<u32>>,
}

fn group_ids(raw: Vec<u32>) -> Vec<GroupId> {
    raw.into_iter().map(GroupId::new).collect()
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            password: value.password,
            roles: value.roles,
            permissions: value.permissions,
            manage_group_ids: value.manage_group_ids.map(group_ids),
            view_group_ids: value.view_group_ids.map(group_ids),
        }
    }
}

fn parse_create_request(payload: CreateUserRequest) -> Result<NewUser, Error> {
    let contact_id = require(payload.contact_id, FieldName::new("contactId"))?;
    let password = require_text(payload.password, FieldName::new("password"))?;
    Ok(NewUser {
        contact_id,
        password,
        roles: payload.roles.unwrap_or_default(),
        permissions: payload.permissions.unwrap_or_default(),
        manage_group_ids: group_ids(payload.manage_group_ids.unwrap_or_default()),
        view_group_ids: group_ids(payload.view_group_ids.unwrap_or_default()),
    })
}

/// List accounts.
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("limit" = Option<usize>, Query, description = "Page size, default 50, max 500"),
        ("offset" = Option<usize>, Query, description = "Items to skip, default 0")
    ),
    responses(
        (status = 200, description = "Users", body = ListResponse<UserResponse>),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let page = default_page_request(query.limit, query.offset)?;
    let users = state.users.list().await.map_err(map_user_error)?;
    let body: ListResponse<UserResponse> =
        page.paginate(users).map(|user| UserResponse::from(&user)).into();
    Ok(HttpResponse::Ok().json(body))
}

/// Create an account for an existing contact.
///
/// The contact must have an email address, which becomes the username.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing field or invalid access scope", body = ErrorSchema),
        (status = 404, description = "Unknown contact", body = ErrorSchema),
        (status = 409, description = "User already exists for the contact", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = parse_create_request(payload.into_inner())?;
    let contact = state
        .contacts
        .find(request.contact_id)
        .await
        .map_err(map_contact_error)?
        .ok_or_else(|| Error::not_found(format!("contact {} not found", request.contact_id)))?;
    let user = state
        .users
        .create(request, contact)
        .await
        .map_err(map_user_error)?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// Update an account's password, roles, permissions or access scope.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = u32, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid change", body = ErrorSchema),
        (status = 404, description = "Unknown user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users
        .update(id, payload.into_inner().into())
        .await
        .map_err(map_user_error)?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

#[cfg(test)]
mod tests;
