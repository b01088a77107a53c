//! Tests for domain error construction and trace capture.

use super::*;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case::invalid_request(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case::not_found(Error::not_found("missing"), ErrorCode::NotFound)]
#[case::creation(Error::creation_failed("rejected"), ErrorCode::CreationFailed)]
#[case::deletion(Error::deletion_failed("failed"), ErrorCode::DeletionFailed)]
#[case::integration(Error::integration_failed("upstream"), ErrorCode::IntegrationFailed)]
#[case::internal(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_matching_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn display_renders_the_message_only() {
    let error = Error::not_found("employee not found with id: 4");
    assert_eq!(error.to_string(), "employee not found with id: 4");
}

#[rstest]
fn code_names_are_snake_case() {
    assert_eq!(ErrorCode::CreationFailed.to_string(), "creation_failed");
    assert_eq!(ErrorCode::InternalError.as_str(), "internal_error");
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid uuid");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn new_leaves_trace_id_empty_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
fn with_trace_id_overrides_captured_value() {
    let error = Error::invalid_request("bad").with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}
