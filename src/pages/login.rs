//! Login chooser: Google OAuth or email/password.
//!
//! The Google button leaves the SPA for the API origin's OAuth entry point;
//! the provider eventually lands back on `/auth/callback?token=...`.

use leptos::prelude::*;

use crate::net::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&api::oauth_login_url());
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"GetCovered.io"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your coverage"</p>
                <a href=api::oauth_login_url() class="auth-button auth-button--google" on:click=on_google>
                    "Continue with Google"
                </a>
                <div class="auth-divider"></div>
                <a class="auth-button" href="/signin">
                    "Sign in with email"
                </a>
                <p class="auth-card__footnote">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
