use super::*;
use crate::components::result_card::card_text;
use crate::pages::home::result_writer;
use leptos::reactive::owner::Owner;

#[test]
fn placeholder_matches_input_hint() {
    assert_eq!(PLACEHOLDER, "Paste your long URL here");
}

#[test]
fn settled_success_delivers_short_url() {
    assert_eq!(
        Settled::from(Ok("http://x/abc".to_owned())),
        Settled::Deliver("http://x/abc".to_owned())
    );
}

#[test]
fn settled_service_error_notifies_with_body() {
    let err = SubmitError::Service { status: 400, body: "bad url".to_owned() };
    assert_eq!(Settled::from(Err(err)), Settled::Notify("bad url".to_owned()));
}

#[test]
fn settled_transport_fault_notifies() {
    let err = SubmitError::Transport("Failed to fetch".to_owned());
    assert_eq!(
        Settled::from(Err(err)),
        Settled::Notify("Request failed: Failed to fetch".to_owned())
    );
}

#[test]
fn settled_empty_input_notifies_validation_message() {
    assert_eq!(Settled::from(Err(SubmitError::EmptyInput)), Settled::Notify("Enter a URL".to_owned()));
}

// =============================================================
// signal-level submit flow
// =============================================================

fn loading_form(draft: &str) -> RwSignal<FormState> {
    let form = RwSignal::new(FormState::new());
    form.update(|f| f.set_draft(draft));
    let request = form.try_update(FormState::begin).unwrap().unwrap();
    assert_eq!(request.url, draft);
    assert!(form.with_untracked(FormState::is_loading));
    form
}

#[test]
fn success_clears_loading_and_writes_result_card() {
    let owner = Owner::new();
    owner.with(|| {
        let result = RwSignal::new(String::new());
        let form = loading_form("https://example.com/long");

        finish(form, Some(result_writer(result)), Ok(HttpReply::new(200, r#"{"short_url":"http://x/abc"}"#)));

        assert!(!form.with_untracked(FormState::is_loading));
        assert_eq!(form.with_untracked(FormState::button_label), "Shorten URL");
        assert_eq!(result.get_untracked(), "http://x/abc");
        assert_eq!(card_text(&result.get_untracked()), Some("http://x/abc"));
    });
}

#[test]
fn service_error_clears_loading_and_keeps_previous_result() {
    let owner = Owner::new();
    owner.with(|| {
        let result = RwSignal::new("http://x/previous".to_owned());
        let form = loading_form("nonsense");

        finish(form, Some(result_writer(result)), Ok(HttpReply::new(400, "bad url")));

        assert!(!form.with_untracked(FormState::is_loading));
        assert_eq!(result.get_untracked(), "http://x/previous");
    });
}

#[test]
fn transport_fault_clears_loading_without_result() {
    let owner = Owner::new();
    owner.with(|| {
        let result = RwSignal::new(String::new());
        let form = loading_form("https://example.com");

        finish(form, Some(result_writer(result)), Err("Failed to fetch".to_owned()));

        assert!(!form.with_untracked(FormState::is_loading));
        assert_eq!(card_text(&result.get_untracked()), None);
    });
}

#[test]
fn success_without_callback_still_clears_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let form = loading_form("https://example.com");

        finish(form, None, Ok(HttpReply::new(200, r#"{"short_url":"http://x/abc"}"#)));

        assert!(!form.with_untracked(FormState::is_loading));
    });
}

#[test]
fn second_begin_on_signal_is_rejected_while_loading() {
    let owner = Owner::new();
    owner.with(|| {
        let form = loading_form("https://first.example");
        form.update(|f| f.set_draft("https://second.example"));

        assert_eq!(form.try_update(FormState::begin), Some(Err(SubmitError::InFlight)));
        assert!(form.with_untracked(FormState::is_loading));
    });
}
