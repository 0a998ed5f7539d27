//! Account settings panel: profile update form and the account danger zone.
//!
//! A successful profile update makes the server reissue the session token;
//! the API client stores the replacement, and the session is reloaded so the
//! header identity reflects the new name immediately.

#[cfg(test)]
#[path = "settings_panel_test.rs"]
mod settings_panel_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::UpdateProfileRequest;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;

/// Validate the profile form before submitting.
fn validate_profile_input(full_name: &str, email: &str) -> Result<(String, String), &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((full_name.to_owned(), email.to_owned()))
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<ApiClient>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let delete_armed = RwSignal::new(false);

    // Seed the form from the profile; re-seeds after a saved update lands.
    Effect::new(move || {
        if let Some(profile) = session.get().profile {
            full_name.set(profile.full_name);
            email.set(profile.email.unwrap_or_default());
        }
    });

    let save_api = api.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        match validate_profile_input(&full_name.get(), &email.get()) {
            Err(message) => {
                notices.update(|queue| {
                    queue.error(message);
                });
            }
            Ok((name_value, email_value)) => {
                let request = UpdateProfileRequest {
                    full_name: name_value,
                    email: email_value,
                };
                saving.set(true);
                #[cfg(feature = "csr")]
                {
                    let api = save_api.clone();
                    leptos::task::spawn_local(async move {
                        match api.update_profile(&request).await {
                            Ok(()) => {
                                let _ = notices.try_update(|queue| {
                                    queue.success("Profile updated");
                                });
                                crate::state::session::load(api.clone(), session).await;
                            }
                            Err(error) => {
                                let _ = notices.try_update(|queue| {
                                    queue.error(error.to_string());
                                });
                            }
                        }
                        let _ = saving.try_set(false);
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (request, &save_api);
                    saving.set(false);
                }
            }
        }
    };

    let delete_api = api.clone();
    let on_delete = move |_| {
        if !delete_armed.get() {
            delete_armed.set(true);
            return;
        }
        #[cfg(feature = "csr")]
        {
            let api = delete_api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_account().await {
                    Ok(()) => {
                        crate::state::session::sign_out(&api.store, session);
                        api.nav.redirect_to("/");
                    }
                    Err(error) => {
                        let _ = notices.try_update(|queue| {
                            queue.error(error.to_string());
                        });
                        let _ = delete_armed.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &delete_api;
        }
    };

    view! {
        <div class="settings">
            <h2 class="settings__title">"Account Settings"</h2>
            <form class="settings__form" on:submit=on_save>
                <label class="settings__label">
                    "Full Name"
                    <input
                        class="settings__input"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="settings__label">
                    "Email Address"
                    <input
                        class="settings__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button class="settings__save" type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving Changes..." } else { "Save Changes" }}
                </button>
            </form>

            <div class="settings__danger">
                <h3>"Danger Zone"</h3>
                <p>"Once you delete your account, there is no going back. Please be certain."</p>
                <button class="settings__delete" on:click=on_delete>
                    {move || {
                        if delete_armed.get() {
                            "Click again to permanently delete"
                        } else {
                            "Delete Account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
