//! Admin dashboard: organization user list and account settings.
//!
//! Requires an admin session. Authenticated non-admins are redirected to
//! their own dashboard with a one-time permission notice; the user list is
//! fetched only after the session resolves to admin.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::settings_panel::SettingsPanel;
use crate::components::user_table::UserTable;
use crate::net::api::ApiClient;
use crate::net::types::AdminUser;
use crate::state::notice::NoticeState;
use crate::state::session::{self, SessionState};
use crate::util::avatar;
use crate::util::greeting;
use crate::util::guard::{self, RouteRequirement};
use crate::util::token_store::CredentialStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AdminTab {
    #[default]
    Users,
    Settings,
}

/// Progress of the user-list fetch.
#[derive(Clone, Debug)]
enum UsersFetch {
    Loading,
    Ready(Vec<AdminUser>),
    Failed(String),
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let store = expect_context::<CredentialStore>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    guard::install_access_redirect(
        RouteRequirement::RequiresAdmin,
        session,
        notices,
        navigate.clone(),
    );

    let tab = RwSignal::new(AdminTab::default());
    let users = RwSignal::new(UsersFetch::Loading);

    // Fetch the user list once the session is confirmed admin.
    let fetch_api = api.clone();
    let mut fetch_started = false;
    Effect::new(move || {
        if session.get().status.is_admin() && !fetch_started {
            fetch_started = true;
            #[cfg(feature = "csr")]
            {
                let api = fetch_api.clone();
                leptos::task::spawn_local(async move {
                    match api.admin_users().await {
                        Ok(list) => {
                            let _ = users.try_set(UsersFetch::Ready(list));
                        }
                        Err(error) => {
                            let _ = users.try_set(UsersFetch::Failed(error.to_string()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &fetch_api;
            }
        }
    });

    move || {
        if !guard::allows(RouteRequirement::RequiresAdmin, session.get().status) {
            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
        }

        let profile = session.get().profile.unwrap_or_default();
        let avatar_src = avatar::avatar_url(profile.avatar_img.as_deref(), &profile.full_name);

        let sign_out_store = store.clone();
        let sign_out_navigate = navigate.clone();
        let on_sign_out = move |_| {
            session::sign_out(&sign_out_store, session);
            sign_out_navigate(guard::LOGIN_PATH, NavigateOptions::default());
        };

        view! {
            <div class="admin-page">
                <header class="dashboard-header">
                    <span class="dashboard-header__brand">"GetCovered.io"</span>
                    <div class="dashboard-header__identity">
                        <img
                            class="dashboard-header__avatar"
                            src=avatar_src
                            alt=avatar::initial(&profile.full_name)
                        />
                        <span class="dashboard-header__name">{greeting::welcome(&profile.full_name)}</span>
                        <button class="dashboard-header__logout" on:click=on_sign_out>
                            "Logout"
                        </button>
                    </div>
                </header>

                <main class="dashboard-main">
                    <section class="dashboard-welcome">
                        <h1>"Admin Dashboard"</h1>
                        <p>"Manage your organization and users from here."</p>
                    </section>

                    <div class="dashboard-tabs">
                        <button
                            class="dashboard-tabs__tab"
                            class=("dashboard-tabs__tab--active", move || tab.get() == AdminTab::Users)
                            on:click=move |_| tab.set(AdminTab::Users)
                        >
                            "Users"
                        </button>
                        <button
                            class="dashboard-tabs__tab"
                            class=("dashboard-tabs__tab--active", move || tab.get() == AdminTab::Settings)
                            on:click=move |_| tab.set(AdminTab::Settings)
                        >
                            "Settings"
                        </button>
                    </div>

                    {move || match tab.get() {
                        AdminTab::Users => match users.get() {
                            UsersFetch::Loading => {
                                view! { <p class="admin-users__loading">"Loading users..."</p> }.into_any()
                            }
                            UsersFetch::Failed(reason) => {
                                view! { <p class="admin-users__error">{format!("Could not load users: {reason}")}</p> }
                                    .into_any()
                            }
                            UsersFetch::Ready(list) => view! { <UserTable users=list/> }.into_any(),
                        },
                        AdminTab::Settings => view! { <SettingsPanel/> }.into_any(),
                    }}
                </main>
            </div>
        }
        .into_any()
    }
}
