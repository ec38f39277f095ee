//! Tests for the domain error payload.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(ErrorCode::InvalidRequest, "\"invalid_request\"")]
#[case(ErrorCode::NotFound, "\"not_found\"")]
#[case(ErrorCode::InternalError, "\"internal_error\"")]
fn codes_serialise_as_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
    let encoded = serde_json::to_string(&code).expect("code serialises");
    assert_eq!(encoded, expected);
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::NotFound, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_falls_back_to_generic_message() {
    let err = Error::new(ErrorCode::InvalidRequest, "");
    assert_eq!(err.message(), "invalid request");
}

#[rstest]
fn trace_id_is_absent_outside_a_request() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_inside_a_request() {
    let trace_id = TraceId::generate();
    let err = TraceId::scope(trace_id, async { Error::not_found("ticket 3 not found") }).await;
    assert_eq!(err.trace_id(), Some(trace_id.to_string().as_str()));
}

#[rstest]
fn payload_uses_camel_case_and_skips_empty_fields() {
    let err = Error::invalid_request("missing required field: maszyna_id")
        .with_details(json!({"field": "maszyna_id", "code": "missing_field"}));
    let value = serde_json::to_value(&err).expect("error serialises");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "missing required field: maszyna_id",
            "details": {"field": "maszyna_id", "code": "missing_field"},
        })
    );
}

#[rstest]
fn payload_accepts_snake_case_trace_id() {
    let err: Error = serde_json::from_value(json!({
        "code": "not_found",
        "message": "gone",
        "trace_id": "abc",
    }))
    .expect("payload decodes");
    assert_eq!(err.trace_id(), Some("abc"));
}
