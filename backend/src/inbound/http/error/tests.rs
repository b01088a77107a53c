//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::creation_failed("rejected"), StatusCode::BAD_REQUEST)]
#[case(Error::deletion_failed("stuck"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::integration_failed("down"), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn read_error_body(response: HttpResponse) -> ErrorBody {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn error_response_renders_message_envelope_and_trace_header() {
    let error = Error::not_found("employee not found with id: 7").with_trace_id(TRACE_ID);

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header is set by error_response")
        .to_str()
        .expect("trace-id is valid UTF-8")
        .to_owned();
    assert_eq!(header, TRACE_ID);

    let body = read_error_body(response).await;
    assert_eq!(
        body,
        ErrorBody {
            error: "employee not found with id: 7".to_owned()
        }
    );
}

#[rstest]
#[actix_web::test]
async fn error_response_omits_trace_header_out_of_scope() {
    let error = Error::internal("error fetching all employees");

    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());

    let body = read_error_body(response).await;
    assert_eq!(body.error, "error fetching all employees");
}
