//! Page header.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1 class="header__title">"URL Shortener"</h1>
            <p class="header__tagline">"Turn long links into short ones."</p>
        </header>
    }
}
