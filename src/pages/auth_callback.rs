//! OAuth landing view: consumes `?token=...` and resolves the session.
//!
//! The provider redirects here exactly once per flow. The token is stored,
//! verified through the auth-status round trip, and the visitor is routed by
//! role; anything short of a verified session lands back on the login view.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::state::session::SessionState;

/// Extract the `token` parameter from a query string. Bearer tokens are
/// URL-safe, so no percent-decoding is needed.
fn token_from_query(query: &str) -> Option<String> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    for pair in trimmed.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() == Some("token") {
            let value = parts.next().unwrap_or("");
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        #[cfg(feature = "csr")]
        {
            let search = web_sys::window()
                .and_then(|window| window.location().search().ok())
                .unwrap_or_default();
            match token_from_query(&search) {
                Some(token) => {
                    api.store.set(&token);
                    let api = api.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        crate::state::session::load(api.clone(), session).await;
                        let status = session
                            .try_get_untracked()
                            .map(|state| state.status)
                            .unwrap_or_default();
                        // An unverified token was already purged by the load.
                        navigate(crate::util::guard::home_for(status), leptos_router::NavigateOptions::default());
                    });
                }
                None => {
                    log::warn!("auth callback reached without a token");
                    navigate(crate::util::guard::LOGIN_PATH, leptos_router::NavigateOptions::default());
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &navigate, session);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <p class="auth-card__subtitle">"Verifying authentication..."</p>
            </div>
        </div>
    }
}
