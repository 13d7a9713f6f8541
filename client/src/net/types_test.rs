use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn text_request_serializes_text_field() {
    let body = TextSummaryRequest { text: "abc".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "text": "abc" }));
}

#[test]
fn url_request_serializes_url_field() {
    let body = UrlSummaryRequest { url: "http://example.com".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "url": "http://example.com" }));
}

// =============================================================
// SummaryResponse
// =============================================================

#[test]
fn summary_response_ignores_extra_fields() {
    let resp: SummaryResponse =
        serde_json::from_str(r#"{"output":"short version","keywords":["a","b"]}"#).unwrap();
    assert_eq!(resp.output, "short version");
}

#[test]
fn summary_response_requires_output() {
    let result = serde_json::from_str::<SummaryResponse>(r#"{"summary":"nope"}"#);
    assert!(result.is_err());
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_status_message_includes_code() {
    let err = ApiError::Status { status: 502 };
    assert_eq!(err.to_string(), "summarize request failed: status 502");
}

#[test]
fn api_error_unavailable_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "summarize API not available on server");
}
