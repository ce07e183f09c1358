//! Submission form: URL input plus submit button.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FormState` lives in a signal. Submitting calls `begin` synchronously,
//! posts from a local task, then calls `settle` and either hands the short
//! URL to `on_result` or raises a notice. The button is disabled and
//! relabelled while the request is outstanding.

#[cfg(test)]
#[path = "shortener_form_test.rs"]
mod shortener_form_test;

use leptos::prelude::*;
use shortener::{Endpoint, FormState, HttpReply, SubmitError};

use crate::util::notice;

const PLACEHOLDER: &str = "Paste your long URL here";

/// What the form does once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Settled {
    Deliver(String),
    Notify(String),
}

impl From<Result<String, SubmitError>> for Settled {
    fn from(result: Result<String, SubmitError>) -> Self {
        match result {
            Ok(short_url) => Self::Deliver(short_url),
            Err(e) => Self::Notify(e.notice()),
        }
    }
}

#[component]
pub fn ShortenerForm(
    #[prop(optional)] endpoint: Option<Endpoint>,
    #[prop(optional)] on_result: Option<Callback<String>>,
) -> impl IntoView {
    let endpoint = endpoint.unwrap_or_default();
    let form = RwSignal::new(FormState::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.try_update(FormState::begin) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                notice::show(&e.notice());
                return;
            }
            None => return,
        };
        let url = endpoint.shorten_url();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::shorten(&url, &request).await;
            finish(form, on_result, outcome);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request);
            finish(form, on_result, Err(crate::net::api::NOT_AVAILABLE.to_owned()));
        }
    };

    view! {
        <form class="card" on:submit=on_submit>
            <input
                class="input"
                type="text"
                placeholder=PLACEHOLDER
                prop:value=move || form.with(|f| f.draft().to_owned())
                on:input=move |ev| form.update(|f| f.set_draft(event_target_value(&ev)))
            />
            <button class="button" type="submit" disabled=move || form.with(FormState::is_loading)>
                {move || form.with(FormState::button_label)}
            </button>
        </form>
    }
}

fn finish(form: RwSignal<FormState>, on_result: Option<Callback<String>>, outcome: Result<HttpReply, String>) {
    let Some(result) = form.try_update(|f| f.settle(outcome)) else {
        return;
    };
    match Settled::from(result) {
        Settled::Deliver(short_url) => {
            if let Some(on_result) = on_result {
                on_result.run(short_url);
            }
        }
        Settled::Notify(message) => notice::show(&message),
    }
}
