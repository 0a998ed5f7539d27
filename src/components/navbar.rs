//! Top navigation bar for the marketing and auth pages.
//!
//! Shows sign-in/sign-up actions for anonymous visitors and a dashboard link
//! plus sign-out for authenticated ones.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::util::guard;
use crate::util::token_store::CredentialStore;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let store = expect_context::<CredentialStore>();
    let navigate = use_navigate();

    let status = move || session.get().status;

    let sign_out_store = store.clone();
    let sign_out_navigate = navigate.clone();
    let on_sign_out = move |_| {
        session::sign_out(&sign_out_store, session);
        sign_out_navigate(guard::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "GetCovered.io"
            </a>
            <nav class="navbar__links">
                <a href="/learn-more">"Learn More"</a>
            </nav>
            <div class="navbar__actions">
                {move || {
                    if status().is_authenticated() {
                        let home = guard::home_for(status());
                        view! {
                            <a class="navbar__link" href=home>
                                "Dashboard"
                            </a>
                            <button class="navbar__button" on:click=on_sign_out.clone()>
                                "Sign Out"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Log In"
                            </a>
                            <a class="navbar__button navbar__button--primary" href="/signup">
                                "Get Started"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
