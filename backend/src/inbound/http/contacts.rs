//! CRM contact endpoints.
//!
//! ```text
//! GET /api/crm/contacts?search=grace&groupId=100&limit=20&offset=0
//! GET /api/crm/contacts/42
//! POST /api/crm/contacts {"person":{...},"phones":[{"value":"+256..."}],"groupMemberships":[{"groupId":100}]}
//! PATCH /api/crm/contacts/42 {"person":{"placeOfWork":"Mulago Hospital"}}
//! ```
//!
//! The detail view mirrors the CRM's person model: emails, phones,
//! addresses and memberships are lists even though a contact holds one of
//! each.

use actix_web::{HttpResponse, get, patch, post, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    ApiResult, Contact, ContactPatch, ContactQuery, Error, Gender, GroupId, NewContact,
    NewContactParts,
};
use crate::inbound::http::avatar_url;
use crate::inbound::http::listing::ListResponse;
use crate::inbound::http::port_errors::map_contact_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, default_page_request, parse_optional_date, require, require_text,
};

const UNKNOWN_GROUP: &str = "Unknown";

/// Query accepted by `GET /api/crm/contacts`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ContactListQuery {
    /// Case-insensitive match on first name, last name or email.
    pub search: Option<String>,
    /// Only members of this group.
    pub group_id: Option<u32>,
    /// Page size, default 50, max 500.
    pub limit: Option<usize>,
    /// Items to skip, default 0.
    pub offset: Option<usize>,
}

/// Primary group reference on a contact summary.
#[derive(Debug, Serialize, ToSchema)]
pub struct PrimaryGroup {
    pub id: u32,
    pub name: String,
    pub role: String,
}

/// Contact as listed.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    pub id: u32,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub email: Option<String>,
    pub phone: String,
    pub age_group: String,
    #[schema(value_type = String, example = "Female")]
    pub gender: Gender,
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
    pub primary_group: PrimaryGroup,
}

fn group_name(state: &HttpState, id: GroupId) -> String {
    state
        .groups
        .get_by_id(id)
        .map_or_else(|_| UNKNOWN_GROUP.to_owned(), |group| group.name.clone())
}

fn summary(state: &HttpState, contact: Contact) -> ContactSummary {
    ContactSummary {
        id: contact.id,
        name: contact.full_name(),
        avatar: avatar_url(contact.id),
        primary_group: PrimaryGroup {
            id: contact.group_id.get(),
            name: group_name(state, contact.group_id),
            role: contact.role,
        },
        first_name: contact.first_name,
        last_name: contact.last_name,
        email: contact.email,
        phone: contact.phone,
        age_group: contact.age_group,
        gender: contact.gender,
        date_of_birth: contact.date_of_birth,
        is_active: true,
    }
}

/// Person section of the detail view.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age_group: String,
    #[schema(value_type = String, example = "Male")]
    pub gender: Gender,
    pub civil_status: String,
    pub place_of_work: Option<String>,
    pub avatar: String,
    pub date_of_birth: Option<NaiveDate>,
}

/// Email or phone entry.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub id: u32,
    #[schema(example = "Mobile")]
    pub category: String,
    pub value: String,
    pub is_primary: bool,
}

/// Postal address entry.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: u32,
    pub category: String,
    pub is_primary: bool,
    pub country: String,
    pub district: String,
    pub free_form: String,
}

/// Group named by a membership.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipGroup {
    pub id: u32,
    pub name: String,
    pub category_name: String,
}

/// Membership of a contact in a group.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: u32,
    pub group_id: u32,
    pub role: String,
    pub group: MembershipGroup,
}

/// Full person view returned by `GET /api/crm/contacts/{id}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailResponse {
    pub id: u32,
    #[schema(example = "Person")]
    pub category: String,
    pub person: PersonResponse,
    pub emails: Vec<ChannelResponse>,
    pub phones: Vec<ChannelResponse>,
    pub addresses: Vec<AddressResponse>,
    pub group_memberships: Vec<MembershipResponse>,
    #[schema(value_type = Vec<Object>)]
    pub identifications: Vec<serde_json::Value>,
    #[schema(value_type = Vec<Object>)]
    pub relationships: Vec<serde_json::Value>,
}

fn detail(state: &HttpState, contact: Contact) -> ContactDetailResponse {
    let id = contact.id;
    let group = state.groups.get_by_id(contact.group_id).ok();
    let membership_group = MembershipGroup {
        id: contact.group_id.get(),
        name: group.map_or_else(|| UNKNOWN_GROUP.to_owned(), |group| group.name.clone()),
        category_name: group
            .map(|group| group.category_name().to_owned())
            .unwrap_or_default(),
    };
    ContactDetailResponse {
        id,
        category: "Person".to_owned(),
        person: PersonResponse {
            id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            age_group: contact.age_group,
            gender: contact.gender,
            civil_status: contact.civil_status,
            place_of_work: contact.place_of_work,
            avatar: avatar_url(id),
            date_of_birth: contact.date_of_birth,
        },
        emails: contact
            .email
            .into_iter()
            .map(|value| ChannelResponse {
                id,
                category: "Personal".to_owned(),
                value,
                is_primary: true,
            })
            .collect(),
        phones: vec![ChannelResponse {
            id,
            category: "Mobile".to_owned(),
            value: contact.phone,
            is_primary: true,
        }],
        addresses: vec![AddressResponse {
            id,
            category: "Home".to_owned(),
            is_primary: true,
            country: contact.country,
            district: contact.district,
            free_form: contact.free_form.unwrap_or_default(),
        }],
        group_memberships: vec![MembershipResponse {
            id,
            group_id: contact.group_id.get(),
            role: contact.role,
            group: membership_group,
        }],
        identifications: Vec::new(),
        relationships: Vec::new(),
    }
}

/// Short form echoed after a write.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactBrief {
    pub id: u32,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
}

/// Acknowledgement for create and update.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactWriteResponse {
    pub id: u32,
    #[schema(example = "Contact created successfully")]
    pub message: String,
    pub contact: ContactBrief,
}

impl ContactWriteResponse {
    fn new(contact: Contact, message: &str) -> Self {
        Self {
            id: contact.id,
            message: message.to_owned(),
            contact: ContactBrief {
                id: contact.id,
                name: contact.full_name(),
                email: contact.email,
                phone: contact.phone,
            },
        }
    }
}

/// Person fields accepted on create and update.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(value_type = Option<String>, example = "Female")]
    pub gender: Option<Gender>,
    #[schema(example = "20-30")]
    pub age_group: Option<String>,
    /// `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
    pub civil_status: Option<String>,
    pub place_of_work: Option<String>,
}

/// Email or phone value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ChannelInput {
    pub value: Option<String>,
}

/// Address fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub country: Option<String>,
    pub district: Option<String>,
    pub free_form: Option<String>,
}

/// Group membership to record.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipInput {
    pub group_id: Option<u32>,
    pub role: Option<String>,
}

/// Body of `POST /api/crm/contacts`. Only the first entry of each list is
/// stored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub person: Option<PersonInput>,
    pub emails: Option<Vec<ChannelInput>>,
    pub phones: Option<Vec<ChannelInput>>,
    pub addresses: Option<Vec<AddressInput>>,
    pub group_memberships: Option<Vec<MembershipInput>>,
}

/// Body of `PATCH /api/crm/contacts/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateContactRequest {
    pub person: Option<PersonInput>,
}

fn first<T>(items: Option<Vec<T>>) -> Option<T> {
    items.and_then(|list| list.into_iter().next())
}

fn parse_create_request(payload: CreateContactRequest) -> Result<NewContactParts, Error> {
    let person = require(payload.person, FieldName::new("person"))?;
    let first_name = require_text(person.first_name, FieldName::new("person.firstName"))?;
    let last_name = require_text(person.last_name, FieldName::new("person.lastName"))?;
    let gender = require(person.gender, FieldName::new("person.gender"))?;
    let date_of_birth =
        parse_optional_date(person.date_of_birth, FieldName::new("person.dateOfBirth"))?;
    let phone = require_text(
        first(payload.phones).and_then(|phone| phone.value),
        FieldName::new("phones"),
    )?;
    let membership = require(
        first(payload.group_memberships),
        FieldName::new("groupMemberships"),
    )?;
    let group_id = require(membership.group_id, FieldName::new("groupMemberships.groupId"))?;
    let address = first(payload.addresses).unwrap_or_default();
    Ok(NewContactParts {
        first_name,
        last_name,
        email: first(payload.emails).and_then(|email| email.value),
        phone,
        gender,
        age_group: person.age_group,
        date_of_birth,
        civil_status: person.civil_status,
        place_of_work: person.place_of_work,
        group_id: GroupId::new(group_id),
        role: membership.role,
        country: address.country,
        district: address.district,
        free_form: address.free_form,
    })
}

fn parse_patch(person: PersonInput) -> Result<ContactPatch, Error> {
    Ok(ContactPatch {
        date_of_birth: parse_optional_date(
            person.date_of_birth,
            FieldName::new("person.dateOfBirth"),
        )?,
        first_name: person.first_name,
        last_name: person.last_name,
        gender: person.gender,
        age_group: person.age_group,
        civil_status: person.civil_status,
        place_of_work: person.place_of_work,
    })
}

/// Search and page through contacts.
#[utoipa::path(
    get,
    path = "/api/crm/contacts",
    params(ContactListQuery),
    responses(
        (status = 200, description = "Contacts", body = ListResponse<ContactSummary>),
        (status = 400, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/crm/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    query: web::Query<ContactListQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let page = default_page_request(query.limit, query.offset)?;
    let contacts = state
        .contacts
        .list(&ContactQuery {
            search: query.search,
            group_id: query.group_id.map(GroupId::new),
        })
        .await
        .map_err(map_contact_error)?;
    let body: ListResponse<ContactSummary> = page
        .paginate(contacts)
        .map(|contact| summary(&state, contact))
        .into();
    Ok(HttpResponse::Ok().json(body))
}

/// Detailed person view.
#[utoipa::path(
    get,
    path = "/api/crm/contacts/{id}",
    params(("id" = u32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact", body = ContactDetailResponse),
        (status = 404, description = "Unknown contact", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/crm/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let contact = state
        .contacts
        .find(id)
        .await
        .map_err(map_contact_error)?
        .ok_or_else(|| Error::not_found(format!("contact {id} not found")))?;
    Ok(HttpResponse::Ok().json(detail(&state, contact)))
}

/// Create a contact in a group.
///
/// Age group, civil status, role and address default when omitted.
#[utoipa::path(
    post,
    path = "/api/crm/contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Contact created", body = ContactWriteResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorSchema),
        (status = 404, description = "Unknown group", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/crm/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<CreateContactRequest>,
) -> ApiResult<HttpResponse> {
    let parts = parse_create_request(payload.into_inner())?;
    state
        .groups
        .get_by_id(parts.group_id)
        .map_err(|_| Error::not_found(format!("group {} not found", parts.group_id)))?;
    let new_contact =
        NewContact::try_from_parts(parts).map_err(|err| Error::invalid_request(err.to_string()))?;
    let contact = state
        .contacts
        .create(new_contact)
        .await
        .map_err(map_contact_error)?;
    Ok(HttpResponse::Created().json(ContactWriteResponse::new(
        contact,
        "Contact created successfully",
    )))
}

/// Update a contact's person fields.
#[utoipa::path(
    patch,
    path = "/api/crm/contacts/{id}",
    params(("id" = u32, Path, description = "Contact identifier")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = ContactWriteResponse),
        (status = 400, description = "Invalid field", body = ErrorSchema),
        (status = 404, description = "Unknown contact", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[patch("/crm/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
    payload: web::Json<UpdateContactRequest>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let patch = parse_patch(payload.into_inner().person.unwrap_or_default())?;
    let contact = state
        .contacts
        .update(id, patch)
        .await
        .map_err(map_contact_error)?;
    Ok(HttpResponse::Ok().json(ContactWriteResponse::new(
        contact,
        "Contact updated successfully",
    )))
}
