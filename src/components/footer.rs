//! Marketing footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <span class="footer__brand">"GetCovered.io"</span>
                    <p>"Coverage management without the paperwork."</p>
                </div>
                <div class="footer__column">
                    <span class="footer__heading">"Product"</span>
                    <a href="/learn-more">"Learn More"</a>
                    <a href="/signup">"Get Started"</a>
                </div>
                <div class="footer__column">
                    <span class="footer__heading">"Account"</span>
                    <a href="/login">"Log In"</a>
                    <a href="/signin">"Email Sign-In"</a>
                </div>
            </div>
            <p class="footer__legal">"© 2025 GetCovered.io. All rights reserved."</p>
        </footer>
    }
}
