//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`api_routes`] registers everything served under `/api`;
//! [`meta_routes`] registers the banner, quick-start and health probes.
//! Literal segments such as `/groups/me` are registered ahead of the
//! `{id}` routes they would otherwise collide with.

pub mod auth;
pub mod contacts;
pub mod dashboard;
pub mod error;
pub mod groups;
pub mod health;
pub mod identity;
pub mod listing;
mod port_errors;
pub mod reports;
pub mod root;
pub mod schemas;
pub mod search;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

/// Placeholder avatar for a contact or account.
pub(crate) fn avatar_url(id: u32) -> String {
    format!("https://i.pravatar.cc/200?img={id}")
}

/// Register the `/api` endpoints on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use zoe_api::inbound::http::api_routes;
///
/// let _app = App::new().service(web::scope("/api").configure(api_routes));
/// ```
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::login)
        .service(auth::refresh)
        .service(auth::logout)
        .service(auth::me)
        .service(groups::list_groups)
        .service(groups::my_groups)
        .service(groups::group_categories)
        .service(groups::get_group)
        .service(groups::group_children)
        .service(groups::group_members)
        .service(contacts::list_contacts)
        .service(contacts::get_contact)
        .service(contacts::create_contact)
        .service(contacts::update_contact)
        .service(reports::list_reports)
        .service(reports::my_submissions)
        .service(reports::team_submissions)
        .service(reports::get_submission)
        .service(reports::get_report)
        .service(reports::create_submission)
        .service(dashboard::dashboard_summary)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::update_user)
        .service(search::search);
}

/// Register the endpoints served outside `/api`.
pub fn meta_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root::banner)
        .service(root::quick_start)
        .service(health::ready)
        .service(health::live);
}
