//! Result display: the last short URL, or nothing.

#[cfg(test)]
#[path = "result_card_test.rs"]
mod result_card_test;

use leptos::prelude::*;
use shortener::{RESULT_LABEL, display_text};

/// Card showing the short URL once one exists.
#[component]
pub fn ResultCard(#[prop(into)] result: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || result.with(|value| card_text(value).is_some())>
            <div class="card result-card">
                <strong>{RESULT_LABEL}</strong>
                <p class="result-card__value">
                    {move || result.with(|value| card_text(value).unwrap_or_default().to_owned())}
                </p>
            </div>
        </Show>
    }
}

pub(crate) fn card_text(result: &str) -> Option<&str> {
    display_text(Some(result))
}
