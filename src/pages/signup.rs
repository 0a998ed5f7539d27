//! Account creation form.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::types::SignupRequest;
use crate::state::session::SessionState;

/// Validate signup input before submitting. Field-level server rejections
/// still surface afterwards as validation failures.
fn validate_signup_input(
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<SignupRequest, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    Ok(SignupRequest {
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: full_name.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let submit_api = api.clone();
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_signup_input(&full_name.get(), &email.get(), &password.get()) {
            Err(reason) => message.set(reason.to_owned()),
            Ok(request) => {
                busy.set(true);
                message.set(String::new());
                #[cfg(feature = "csr")]
                {
                    let api = submit_api.clone();
                    let navigate = submit_navigate.clone();
                    leptos::task::spawn_local(async move {
                        match api.signup(&request).await {
                            Ok(issued) => {
                                api.store.set(&issued.token);
                                crate::state::session::load(api.clone(), session).await;
                                let status = session
                                    .try_get_untracked()
                                    .map(|state| state.status)
                                    .unwrap_or_default();
                                navigate(crate::util::guard::home_for(status), leptos_router::NavigateOptions::default());
                            }
                            Err(error) => {
                                let _ = message.try_set(error.to_string());
                                let _ = busy.try_set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (request, &submit_api, &submit_navigate);
                    busy.set(false);
                }
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"A few details and you're covered"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <p class="auth-card__footnote">
                    "Already covered? " <a href="/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
