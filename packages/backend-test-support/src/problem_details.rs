//! Assertions over the RFC 7807 error contract.
//!
//! Test binaries use this instead of poking at raw JSON so the contract
//! (status, code, detail, trace-id parity with `x-request-id`) is checked the
//! same way everywhere, without depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ProblemBody {
    status: u16,
    detail: String,
    code: String,
    trace_id: String,
}

/// Assert that an error response carries a conforming problem-details body.
///
/// Checks the HTTP status, the `application/problem+json` content type, the
/// machine-readable `code`, trace-id parity between body and `x-request-id`
/// header, and (when given) a substring of the human-readable detail.
pub async fn assert_problem_details_from_service_response(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_detail_contains: Option<&str>,
) {
    assert_eq!(resp.status(), expected_status);

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(content_type, "application/problem+json");

    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-request-id header should be present and valid UTF-8");

    let bytes = actix_web::test::read_body(resp).await;
    let body: ProblemBody = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "body should be problem-details JSON: {e}; got {}",
            String::from_utf8_lossy(&bytes)
        )
    });

    assert_eq!(body.status, expected_status.as_u16());
    assert_eq!(body.code, expected_code);
    assert_eq!(
        body.trace_id, request_id,
        "trace_id in body should match the x-request-id header"
    );

    if let Some(expected) = expected_detail_contains {
        assert!(
            body.detail.contains(expected),
            "expected detail to contain {expected:?}, got {:?}",
            body.detail
        );
    }
}
