//! Group hierarchy read endpoints.
//!
//! ```text
//! GET /api/groups?type=fellowship
//! GET /api/groups/me
//! GET /api/groups/categories
//! GET /api/groups/100
//! GET /api/groups/20/children
//! GET /api/groups/100/members?limit=10&offset=0
//! ```

use std::str::FromStr;

use actix_web::{HttpResponse, get, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{
    Address, ApiResult, Contact, ContactQuery, Error, Gender, Group, GroupId, GroupType,
    filter_manageable,
};
use crate::inbound::http::avatar_url;
use crate::inbound::http::identity::CurrentUser;
use crate::inbound::http::listing::{ListResponse, PageQuery, PaginationBody};
use crate::inbound::http::port_errors::map_contact_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, default_page_request, invalid_value_error};

pub(crate) const LEADER_ROLE: &str = "Leader";

/// Group as listed by the collection endpoints.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    #[schema(example = 100)]
    pub id: u32,
    #[schema(example = "Phase MC")]
    pub name: String,
    /// Hierarchy level.
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "fellowship")]
    pub group_type: GroupType,
    #[schema(example = 1)]
    pub category_id: u32,
    #[schema(example = "Missional Community")]
    pub category_name: String,
    /// Present on `/groups/me` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Leader")]
    pub role: Option<String>,
    pub privacy: String,
    pub parent_id: Option<u32>,
    pub member_count: u32,
    /// 90% of members, rounded down.
    pub active_members: u32,
    pub details: String,
    #[schema(value_type = Option<Object>)]
    pub meta_data: Option<Value>,
}

impl From<&Group> for GroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.get(),
            name: group.name.clone(),
            group_type: group.group_type,
            category_id: group.category_id(),
            category_name: group.category_name().to_owned(),
            role: None,
            privacy: group.privacy.clone(),
            parent_id: group.parent_id.map(GroupId::get),
            member_count: group.member_count,
            active_members: group.active_members(),
            details: group.details.clone(),
            meta_data: group.meta_data.clone(),
        }
    }
}

/// Totals across the listed groups.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub total_groups: usize,
    pub total_members: u64,
}

/// Group collection with totals. The list is never sliced, so the
/// pagination block always covers every item.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupListResponse {
    pub items: Vec<GroupResponse>,
    pub summary: GroupSummary,
    pub pagination: PaginationBody,
}

impl GroupListResponse {
    fn new(items: Vec<GroupResponse>) -> Self {
        let Page { items, pagination } = Page::whole(items);
        let total_members = items.iter().map(|item| u64::from(item.member_count)).sum();
        Self {
            summary: GroupSummary {
                total_groups: items.len(),
                total_members,
            },
            pagination: pagination.into(),
            items,
        }
    }
}

/// Group led by the signed-in user, as embedded in the login response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedGroupResponse {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "fellowship")]
    pub group_type: GroupType,
    pub category_id: u32,
    pub category_name: String,
    #[schema(example = "Leader")]
    pub role: String,
    pub parent_id: Option<u32>,
    pub member_count: u32,
}

impl From<&Group> for LedGroupResponse {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.get(),
            name: group.name.clone(),
            group_type: group.group_type,
            category_id: group.category_id(),
            category_name: group.category_name().to_owned(),
            role: LEADER_ROLE.to_owned(),
            parent_id: group.parent_id.map(GroupId::get),
            member_count: group.member_count,
        }
    }
}

/// Reference to another group.
#[derive(Debug, Serialize, ToSchema)]
pub struct GroupRef {
    pub id: u32,
    pub name: String,
}

/// Single group with its parent and address.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailResponse {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "zone")]
    pub group_type: GroupType,
    pub category_id: u32,
    pub category_name: String,
    pub privacy: String,
    pub details: String,
    pub parent_id: Option<u32>,
    pub parent: Option<GroupRef>,
    pub member_count: u32,
    pub active_members: u32,
    #[schema(value_type = Option<Object>)]
    pub address: Option<Address>,
    #[schema(value_type = Option<Object>)]
    pub meta_data: Option<Value>,
}

/// Member of a group.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: u32,
    pub contact_id: u32,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub phone: String,
    pub email: Option<String>,
    #[schema(example = "Member")]
    pub role: String,
    pub age_group: String,
    #[schema(value_type = String, example = "Female")]
    pub gender: Gender,
    pub is_active: bool,
    pub group_id: u32,
}

impl From<Contact> for MemberResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            contact_id: contact.id,
            name: contact.full_name(),
            avatar: avatar_url(contact.id),
            first_name: contact.first_name,
            last_name: contact.last_name,
            phone: contact.phone,
            email: contact.email,
            role: contact.role,
            age_group: contact.age_group,
            gender: contact.gender,
            is_active: true,
            group_id: contact.group_id.get(),
        }
    }
}

/// One hierarchy level with its group count.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Missional Community")]
    pub name: String,
    pub group_count: usize,
}

/// Every hierarchy level, leaf first.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

/// Query for `GET /api/groups`.
#[derive(Debug, Deserialize)]
pub struct GroupListQuery {
    #[serde(rename = "type")]
    group_type: Option<String>,
}

fn parse_group_type(raw: &str) -> Result<GroupType, Error> {
    GroupType::from_str(raw)
        .map_err(|_| invalid_value_error(FieldName::new("type"), raw, "unknown group type"))
}

fn find_group(state: &HttpState, id: u32) -> Result<&Group, Error> {
    state
        .groups
        .get_by_id(GroupId::new(id))
        .map_err(|_| Error::not_found(format!("group {id} not found")))
}

/// List every group, optionally narrowed to one level.
#[utoipa::path(
    get,
    path = "/api/groups",
    params(
        ("type" = Option<String>, Query, description = "movement, network, fob, location, zone or fellowship")
    ),
    responses(
        (status = 200, description = "Groups with totals", body = GroupListResponse),
        (status = 400, description = "Unknown group type", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "listGroups"
)]
#[get("/groups")]
pub async fn list_groups(
    state: web::Data<HttpState>,
    query: web::Query<GroupListQuery>,
) -> ApiResult<HttpResponse> {
    let filter = query
        .into_inner()
        .group_type
        .as_deref()
        .map(parse_group_type)
        .transpose()?;
    let items = match filter {
        Some(group_type) => state.groups.by_type(group_type),
        None => state.groups.groups().iter().collect(),
    }
    .into_iter()
    .map(GroupResponse::from)
    .collect();
    Ok(HttpResponse::Ok().json(GroupListResponse::new(items)))
}

/// Groups the current user manages.
#[utoipa::path(
    get,
    path = "/api/groups/me",
    responses(
        (status = 200, description = "Managed groups with totals", body = GroupListResponse)
    ),
    tags = ["groups"],
    operation_id = "listMyGroups"
)]
#[get("/groups/me")]
pub async fn my_groups(
    state: web::Data<HttpState>,
    user: CurrentUser,
) -> ApiResult<HttpResponse> {
    let user = user.into_inner();
    let items = filter_manageable(state.groups.groups(), &user.scope)
        .into_iter()
        .map(|group| GroupResponse {
            role: Some(LEADER_ROLE.to_owned()),
            ..GroupResponse::from(group)
        })
        .collect();
    Ok(HttpResponse::Ok().json(GroupListResponse::new(items)))
}

/// Hierarchy levels with the number of groups at each.
#[utoipa::path(
    get,
    path = "/api/groups/categories",
    responses((status = 200, description = "Group categories", body = CategoriesResponse)),
    tags = ["groups"],
    operation_id = "listGroupCategories"
)]
#[get("/groups/categories")]
pub async fn group_categories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let counts = state.groups.category_summary();
    let mut levels = GroupType::ALL.to_vec();
    levels.sort_by_key(|level| level.category_id());
    let categories = levels
        .into_iter()
        .map(|level| CategoryResponse {
            id: level.category_id(),
            name: level.category_name().to_owned(),
            group_count: counts.get(&level.category_id()).copied().unwrap_or(0),
        })
        .collect();
    Ok(HttpResponse::Ok().json(CategoriesResponse { categories }))
}

/// Fetch one group.
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    params(("id" = u32, Path, description = "Group identifier")),
    responses(
        (status = 200, description = "Group", body = GroupDetailResponse),
        (status = 404, description = "Unknown group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "getGroup"
)]
#[get("/groups/{id}")]
pub async fn get_group(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<HttpResponse> {
    let group = find_group(&state, path.into_inner())?;
    let parent = state.groups.parent(group.id).map(|parent| GroupRef {
        id: parent.id.get(),
        name: parent.name.clone(),
    });
    Ok(HttpResponse::Ok().json(GroupDetailResponse {
        id: group.id.get(),
        name: group.name.clone(),
        group_type: group.group_type,
        category_id: group.category_id(),
        category_name: group.category_name().to_owned(),
        privacy: group.privacy.clone(),
        details: group.details.clone(),
        parent_id: group.parent_id.map(GroupId::get),
        parent,
        member_count: group.member_count,
        active_members: group.active_members(),
        address: group.address.clone(),
        meta_data: group.meta_data.clone(),
    }))
}

/// Direct children of a group.
#[utoipa::path(
    get,
    path = "/api/groups/{id}/children",
    params(("id" = u32, Path, description = "Group identifier")),
    responses(
        (status = 200, description = "Child groups", body = ListResponse<GroupResponse>),
        (status = 404, description = "Unknown group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "listGroupChildren"
)]
#[get("/groups/{id}/children")]
pub async fn group_children(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<HttpResponse> {
    let group = find_group(&state, path.into_inner())?;
    let children = state
        .groups
        .children(group.id)
        .into_iter()
        .map(GroupResponse::from)
        .collect();
    let body: ListResponse<GroupResponse> = pagination::Page::whole(children).into();
    Ok(HttpResponse::Ok().json(body))
}

/// Paginated members of a group.
#[utoipa::path(
    get,
    path = "/api/groups/{id}/members",
    params(
        ("id" = u32, Path, description = "Group identifier"),
        ("limit" = Option<usize>, Query, description = "Page size, default 50, max 500"),
        ("offset" = Option<usize>, Query, description = "Items to skip, default 0")
    ),
    responses(
        (status = 200, description = "Group members", body = ListResponse<MemberResponse>),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 404, description = "Unknown group", body = ErrorSchema)
    ),
    tags = ["groups"],
    operation_id = "listGroupMembers"
)]
#[get("/groups/{id}/members")]
pub async fn group_members(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
    query: web::Query<PageQuery>,
) -> ApiResult<HttpResponse> {
    let group_id = find_group(&state, path.into_inner())?.id;
    let query = query.into_inner();
    let page = default_page_request(query.limit, query.offset)?;
    let members = state
        .contacts
        .list(&ContactQuery {
            search: None,
            group_id: Some(group_id),
        })
        .await
        .map_err(map_contact_error)?;
    let body: ListResponse<MemberResponse> = page.paginate(members).map(MemberResponse::from).into();
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests;
