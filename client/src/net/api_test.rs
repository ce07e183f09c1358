use super::*;

#[test]
fn build_time_variable_is_the_shared_name() {
    assert_eq!(shortener::BASE_URL_ENV, "SHORTENER_BASE_URL");
}

#[test]
fn endpoint_from_defaults_when_unset() {
    assert_eq!(endpoint_from(None).shorten_url(), "http://localhost:3000/shorten");
}

#[test]
fn endpoint_from_uses_build_value() {
    assert_eq!(endpoint_from(Some("https://sho.rt/")).shorten_url(), "https://sho.rt/shorten");
}

#[test]
fn endpoint_from_falls_back_on_invalid_value() {
    assert_eq!(endpoint_from(Some("not a url")), Endpoint::default());
}

#[test]
fn shorten_is_unavailable_outside_browser() {
    let request = ShortenRequest { url: "https://example.com".to_owned() };
    let outcome = futures::executor::block_on(shorten("http://localhost:3000/shorten", &request));
    assert_eq!(outcome, Err(NOT_AVAILABLE.to_owned()));
}
