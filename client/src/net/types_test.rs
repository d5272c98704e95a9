use super::*;

#[test]
fn completion_request_serializes_query_field() {
    let req = CompletionRequest { query: "2+2?".into() };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"query":"2+2?"}"#);
}

#[test]
fn completion_response_decodes_reply() {
    let resp: CompletionResponse = serde_json::from_str(r#"{"response":"4"}"#).unwrap();
    assert_eq!(resp, CompletionResponse::Reply { response: "4".into() });
    assert_eq!(resp.into_error(), None);
}

#[test]
fn completion_response_decodes_error() {
    let resp: CompletionResponse = serde_json::from_str(r#"{"error":"Query is required"}"#).unwrap();
    assert_eq!(resp.clone().into_error().as_deref(), Some("Query is required"));
    assert_eq!(resp, CompletionResponse::Error { error: "Query is required".into() });
}

#[test]
fn completion_response_rejects_unrelated_shape() {
    assert!(serde_json::from_str::<CompletionResponse>(r#"{"text":"4"}"#).is_err());
    assert!(serde_json::from_str::<CompletionResponse>(r#"{"response":null}"#).is_err());
}
