//! Email/password sign-in form.
//!
//! A 401 here is a wrong password, not an expired session: the API client
//! propagates it untouched and the form shows the failure inline.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::state::session::SessionState;

/// Validate the form before submitting.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// User-facing message for a failed login attempt.
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Incorrect email or password.".to_owned(),
        ApiError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

#[component]
pub fn SigninPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

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
        match validate_credentials(&email.get(), &password.get()) {
            Err(reason) => message.set(reason.to_owned()),
            Ok((email_value, password_value)) => {
                let request = LoginRequest {
                    email: email_value,
                    password: password_value,
                };
                busy.set(true);
                message.set(String::new());
                #[cfg(feature = "csr")]
                {
                    let api = submit_api.clone();
                    let navigate = submit_navigate.clone();
                    leptos::task::spawn_local(async move {
                        match api.login_password(&request).await {
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
                                let _ = message.try_set(login_error_message(&error));
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
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in with your email and password"</p>
                <form class="auth-form" on:submit=on_submit>
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
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
                <p class="auth-card__footnote">
                    "No account yet? " <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
