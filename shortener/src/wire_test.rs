use super::*;

#[test]
fn shorten_request_serializes_single_url_field() {
    let req = ShortenRequest { url: "https://example.com/a?b=c".to_owned() };
    let json = req.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({ "url": "https://example.com/a?b=c" }));
}

#[test]
fn shorten_response_ignores_extra_fields() {
    let body = r#"{"short_url":"http://x/abc","original_url":"https://example.com"}"#;
    let resp = ShortenResponse::from_json(body).unwrap();
    assert_eq!(resp.short_url, "http://x/abc");
}

#[test]
fn shorten_response_requires_short_url() {
    assert!(ShortenResponse::from_json(r#"{"url":"http://x/abc"}"#).is_err());
}

#[test]
fn shorten_response_rejects_non_string_short_url() {
    assert!(ShortenResponse::from_json(r#"{"short_url":42}"#).is_err());
}

#[test]
fn shorten_response_rejects_plain_text() {
    assert!(ShortenResponse::from_json("http://x/abc").is_err());
}
