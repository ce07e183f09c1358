//! Page shell: owns the result value and composes the page.
//!
//! The form writes the result through a callback and the card reads it;
//! neither knows about the other.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::result_card::ResultCard;
use crate::components::shortener_form::ShortenerForm;
use crate::net::api::configured_endpoint;

/// Callback that overwrites `result` with each delivered short URL.
pub(crate) fn result_writer(result: RwSignal<String>) -> Callback<String> {
    Callback::new(move |short_url: String| result.set(short_url))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let result = RwSignal::new(String::new());
    let on_result = result_writer(result);

    view! {
        <div class="container">
            <Header/>
            <ShortenerForm endpoint=configured_endpoint() on_result=on_result/>
            <ResultCard result=result/>
            <Footer/>
        </div>
    }
}
