use super::*;

#[test]
fn empty_input_notice() {
    assert_eq!(SubmitError::EmptyInput.notice(), "Enter a URL");
}

#[test]
fn service_notice_is_body_verbatim() {
    let err = SubmitError::Service { status: 400, body: "bad url".to_owned() };
    assert_eq!(err.notice(), "bad url");
    assert_eq!(err.to_string(), "service responded 400: bad url");
}

#[test]
fn service_notice_keeps_whitespace() {
    let err = SubmitError::Service { status: 400, body: "Invalid request body\n".to_owned() };
    assert_eq!(err.notice(), "Invalid request body\n");
}

#[test]
fn transport_and_decode_notices_name_the_problem() {
    assert_eq!(
        SubmitError::Transport("connection refused".to_owned()).notice(),
        "Request failed: connection refused"
    );
    assert_eq!(
        SubmitError::Decode("missing field `short_url`".to_owned()).notice(),
        "Unexpected response: missing field `short_url`"
    );
}
