//! Page footer with the author credit.

use leptos::prelude::*;

const PROFILE_URL: &str = "https://www.linkedin.com/in/piyush-kumar-upadhyaya/";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Made with love by HSEVEN"</span>
            <a class="footer-link" href=PROFILE_URL target="_blank" rel="noreferrer">
                "LinkedIn"
            </a>
        </footer>
    }
}
