//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastLayer;
use crate::net::api::ApiClient;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, auth_callback::AuthCallbackPage, dashboard::DashboardPage,
    home::HomePage, learn_more::LearnMorePage, login::LoginPage, signin::SigninPage,
    signup::SignupPage,
};
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::nav::Navigator;
use crate::util::token_store::CredentialStore;

/// Root application component.
///
/// Builds the credential store, navigator, and API client for the current
/// environment, provides the shared state contexts, kicks off session
/// resolution, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "csr")]
    let store = CredentialStore::browser();
    #[cfg(not(feature = "csr"))]
    let store = CredentialStore::in_memory();

    #[cfg(feature = "csr")]
    let nav = Navigator::browser();
    #[cfg(not(feature = "csr"))]
    let nav = Navigator::recorded("/");

    let api = ApiClient::new(store.clone(), nav);
    let session = RwSignal::new(SessionState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(store);
    provide_context(api.clone());
    provide_context(session);
    provide_context(notices);

    // Resolve the session at boot, and again whenever another tab of the
    // same origin logs in or out, so tabs converge on the same role.
    #[cfg(feature = "csr")]
    {
        let boot_api = api.clone();
        leptos::task::spawn_local(crate::state::session::load(boot_api, session));

        let watch_api = api.clone();
        crate::util::token_store::on_external_change(move || {
            let api = watch_api.clone();
            leptos::task::spawn_local(crate::state::session::load(api, session));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &api;
    }

    view! {
        <Title text="GetCovered.io"/>

        <ToastLayer/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("learn-more") view=LearnMorePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=AuthCallbackPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=AdminDashboardPage
                />
            </Routes>
        </Router>
    }
}
