//! Banner, docs and health probes.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::Value;
use support::seeded_app;

#[rstest]
#[case("/")]
#[case("/docs")]
#[case("/health/ready")]
#[case("/health/live")]
#[actix_web::test]
async fn meta_endpoints_respond_with_trace_id(#[case] uri: &str) {
    let app = actix_test::init_service(seeded_app()).await;
    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("trace-id"));
}

#[actix_web::test]
async fn banner_lists_test_accounts() {
    let app = actix_test::init_service(seeded_app()).await;
    let body: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/").to_request(),
    )
    .await;
    assert_eq!(body["message"], "Project Zoe Mock API Server");
    let accounts = body["testUsers"].as_array().expect("test users");
    assert_eq!(accounts.len(), 7);
}
