//! Free-text search.
//!
//! ```text
//! GET /api/search?q=victory&type=groups&limit=5
//! ```

use std::str::FromStr;

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    ApiResult, Contact, DEFAULT_SEARCH_LIMIT, Group, SearchKind, search_contacts, search_groups,
};
use crate::inbound::http::avatar_url;
use crate::inbound::http::port_errors::map_contact_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_value_error, page_request, require_text};

/// Query accepted by `GET /api/search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive fragment of a name.
    pub q: Option<String>,
    /// `all`, `contacts` or `groups`; default `all`.
    #[serde(rename = "type")]
    #[param(rename = "type")]
    pub kind: Option<String>,
    /// Hits per kind, default 20.
    pub limit: Option<usize>,
}

/// Contact hit.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactHit {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "contact")]
    pub kind: String,
    pub avatar: String,
    /// Name of the contact's primary group.
    pub group: String,
}

/// Group hit.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupHit {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(example = "group")]
    pub kind: String,
    #[schema(example = "Missional Community")]
    pub category: String,
    pub member_count: u32,
}

impl From<&Group> for GroupHit {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.get(),
            name: group.name.clone(),
            kind: "group".to_owned(),
            category: group.category_name().to_owned(),
            member_count: group.member_count,
        }
    }
}

/// Hits grouped by kind.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct SearchResults {
    pub contacts: Vec<ContactHit>,
    pub groups: Vec<GroupHit>,
}

/// Search payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub results: SearchResults,
    /// Hits across both kinds.
    pub total: usize,
}

fn contact_hit(state: &HttpState, contact: &Contact) -> ContactHit {
    ContactHit {
        id: contact.id,
        name: contact.full_name(),
        kind: "contact".to_owned(),
        avatar: avatar_url(contact.id),
        group: state
            .groups
            .get_by_id(contact.group_id)
            .map_or_else(|_| "Unknown".to_owned(), |group| group.name.clone()),
    }
}

/// Search contacts by name and groups by name.
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search hits", body = SearchResponse),
        (status = 400, description = "Missing query, unknown type or invalid limit", body = ErrorSchema)
    ),
    tags = ["search"],
    operation_id = "search"
)]
#[get("/search")]
pub async fn search(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let needle = require_text(query.q, FieldName::new("q"))?;
    let kind = query
        .kind
        .as_deref()
        .map(|raw| {
            SearchKind::from_str(raw).map_err(|err| {
                invalid_value_error(FieldName::new("type"), raw, &err.to_string())
            })
        })
        .transpose()?
        .unwrap_or_default();
    let limit = page_request(query.limit, None, DEFAULT_SEARCH_LIMIT)?.limit();

    let mut results = SearchResults::default();
    if kind.includes_contacts() {
        let contacts = state.contacts.all().await.map_err(map_contact_error)?;
        results.contacts = search_contacts(&contacts, &needle, limit)
            .into_iter()
            .map(|contact| contact_hit(&state, contact))
            .collect();
    }
    if kind.includes_groups() {
        results.groups = search_groups(state.groups.groups(), &needle, limit)
            .into_iter()
            .map(GroupHit::from)
            .collect();
    }
    let total = results.contacts.len() + results.groups.len();
    Ok(HttpResponse::Ok().json(SearchResponse { results, total }))
}

#[cfg(test)]
mod tests;
