//! Tests for the search handler.

use super::*;
use crate::inbound::http::test_utils::{TestPorts, member};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

fn test_app(
    ports: TestPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .service(web::scope("/api").service(search))
}

fn ports_with_contacts() -> TestPorts {
    let mut ports = TestPorts::default();
    ports.contacts.expect_all().returning(|| {
        Ok(vec![
            member(1, "Victoria", "Nakato", 102),
            member(2, "Grace", "Namugga", 100),
        ])
    });
    ports
}

async fn get_json(ports: TestPorts, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(ports)).await;
    let res =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    (status, actix_test::read_body_json(res).await)
}

#[actix_web::test]
async fn searches_contacts_and_groups() {
    let (status, body) = get_json(ports_with_contacts(), "/api/search?q=vict").await;
    assert_eq!(status, StatusCode::OK);
    let contacts = &body["results"]["contacts"];
    assert_eq!(contacts.as_array().map(Vec::len), Some(1));
    assert_eq!(contacts[0]["name"], "Victoria Nakato");
    assert_eq!(contacts[0]["type"], "contact");
    assert_eq!(contacts[0]["group"], "Victory MC");
    let groups = &body["results"]["groups"];
    assert_eq!(groups[0]["name"], "Victory MC");
    assert_eq!(groups[0]["category"], "Missional Community");
    assert_eq!(body["total"], 1 + groups.as_array().map_or(0, Vec::len));
}

#[actix_web::test]
async fn groups_only_skips_contact_store() {
    let (status, body) =
        get_json(TestPorts::default(), "/api/search?q=victory&type=groups&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["contacts"], serde_json::json!([]));
    assert_eq!(body["results"]["groups"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["total"], 1);
}

#[rstest]
#[case("/api/search", "q")]
#[case("/api/search?q=%20%20", "q")]
#[case("/api/search?q=mc&type=reports", "type")]
#[case("/api/search?q=mc&limit=0", "limit")]
#[actix_web::test]
async fn rejects_bad_queries(#[case] uri: &str, #[case] field: &str) {
    let (status, body) = get_json(TestPorts::default(), uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], field);
}
