//! Contact creation and pagination against the seeded dataset.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};
use support::seeded_app;

fn ids(body: &Value) -> Vec<u64> {
    body["items"]
        .as_array()
        .expect("items")
        .iter()
        .filter_map(|item| item["id"].as_u64())
        .collect()
}

#[actix_web::test]
async fn created_contact_reads_back() {
    let app = actix_test::init_service(seeded_app()).await;
    let create = actix_test::TestRequest::post()
        .uri("/api/crm/contacts")
        .set_json(json!({
            "person": {"firstName": "Ruth", "lastName": "Achieng", "gender": "Female"},
            "emails": [{"value": "ruth.achieng@example.org"}],
            "phones": [{"value": "+256701234567"}],
            "groupMemberships": [{"groupId": 100}]
        }))
        .to_request();
    let res = actix_test::call_service(&app, create).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(res).await;
    let id = created["id"].as_u64().expect("id");

    let read = actix_test::TestRequest::get()
        .uri(&format!("/api/crm/contacts/{id}"))
        .to_request();
    let detail: Value = actix_test::call_and_read_body_json(&app, read).await;
    assert_eq!(detail["person"]["firstName"], "Ruth");
    assert_eq!(detail["person"]["lastName"], "Achieng");
    assert_eq!(detail["emails"][0]["value"], "ruth.achieng@example.org");
    assert_eq!(detail["groupMemberships"][0]["groupId"], 100);
}

#[actix_web::test]
async fn consecutive_pages_are_disjoint_and_ordered() {
    let app = actix_test::init_service(seeded_app()).await;
    let mut pages = Vec::new();
    for uri in [
        "/api/crm/contacts?limit=2&offset=0",
        "/api/crm/contacts?limit=2&offset=2",
        "/api/crm/contacts?limit=4&offset=0",
    ] {
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert!(body["pagination"]["total"].as_u64().is_some_and(|total| total > 4));
        pages.push(ids(&body));
    }
    let (first, second, whole) = (&pages[0], &pages[1], &pages[2]);
    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|id| !second.contains(id)));
    let joined: Vec<u64> = first.iter().chain(second).copied().collect();
    assert_eq!(&joined, whole);
}

#[actix_web::test]
async fn over_limit_page_is_rejected() {
    let app = actix_test::init_service(seeded_app()).await;
    let req = actix_test::TestRequest::get()
        .uri("/api/crm/contacts?limit=501")
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
