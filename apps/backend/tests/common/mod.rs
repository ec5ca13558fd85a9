#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Validate that a response follows the ProblemDetails structure, with the
/// trace_id in the body matching the x-trace-id header, and return the body
/// for further assertions.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let trace_hdr = HeaderName::from_static("x-trace-id");
    let trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string();
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .expect("content-type header should be present");
    assert!(
        content_type.starts_with("application/problem+json"),
        "expected problem+json, got {content_type}"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], expected_code);
    assert_eq!(body["status"], expected_status);
    assert_eq!(body["trace_id"], trace_id.as_str());
    assert!(body["detail"].is_string());
    assert!(body["title"].is_string());
    body
}

/// Find an item id in a round view by its title.
pub fn item_id_by_title(round: &Value, title: &str) -> String {
    round["items"]
        .as_array()
        .expect("round view has items")
        .iter()
        .find(|item| item["title"] == title)
        .unwrap_or_else(|| panic!("no item titled {title:?}"))["id"]
        .as_str()
        .expect("item id is a string")
        .to_string()
}

/// Titles of the not-yet-eliminated items of a round view.
pub fn remaining_titles(round: &Value) -> Vec<String> {
    round["items"]
        .as_array()
        .expect("round view has items")
        .iter()
        .filter(|item| item["eliminated"] == false)
        .map(|item| item["title"].as_str().expect("title").to_string())
        .collect()
}
