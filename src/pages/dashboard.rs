//! User dashboard: coverage overview and account settings.
//!
//! Requires an authenticated session. While the session is still resolving
//! the page renders a neutral loading state, so protected content never
//! flashes for a visitor who is about to be redirected.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::settings_panel::SettingsPanel;
use crate::components::stat_card::StatCard;
use crate::state::notice::NoticeState;
use crate::state::session::{self, SessionState};
use crate::util::avatar;
use crate::util::greeting;
use crate::util::guard::{self, RouteRequirement};
use crate::util::token_store::CredentialStore;

/// Coverage figures shown on the overview tab.
const COVERAGE_STATS: [(&str, &str); 4] = [
    ("Active Policies", "3"),
    ("Claims Filed", "1"),
    ("Coverage Amount", "$500,000"),
    ("Next Payment", "Aug 15"),
];

/// Recent account activity shown on the overview tab.
const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Policy Renewed", "2 days ago"),
    ("Claim Processed", "1 week ago"),
    ("Payment Received", "2 weeks ago"),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum DashboardTab {
    #[default]
    Overview,
    Settings,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let store = expect_context::<CredentialStore>();
    let navigate = use_navigate();

    guard::install_access_redirect(
        RouteRequirement::RequiresAuth,
        session,
        notices,
        navigate.clone(),
    );

    let tab = RwSignal::new(DashboardTab::default());

    move || {
        if !guard::allows(RouteRequirement::RequiresAuth, session.get().status) {
            return view! { <div class="page-loading">"Loading..."</div> }.into_any();
        }

        let profile = session.get().profile.unwrap_or_default();
        let avatar_src = avatar::avatar_url(profile.avatar_img.as_deref(), &profile.full_name);
        let email = profile.email.clone().unwrap_or_default();

        let sign_out_store = store.clone();
        let sign_out_navigate = navigate.clone();
        let on_sign_out = move |_| {
            session::sign_out(&sign_out_store, session);
            sign_out_navigate(guard::LOGIN_PATH, NavigateOptions::default());
        };

        view! {
            <div class="dashboard-page">
                <header class="dashboard-header">
                    <span class="dashboard-header__brand">"GetCovered.io"</span>
                    <div class="dashboard-header__identity">
                        <img
                            class="dashboard-header__avatar"
                            src=avatar_src
                            alt=avatar::initial(&profile.full_name)
                        />
                        <div>
                            <span class="dashboard-header__name">{profile.full_name.clone()}</span>
                            <span class="dashboard-header__email">{email}</span>
                        </div>
                        <button class="dashboard-header__logout" on:click=on_sign_out>
                            "Logout"
                        </button>
                    </div>
                </header>

                <main class="dashboard-main">
                    <section class="dashboard-welcome">
                        <h1>{greeting::welcome(&profile.full_name)}</h1>
                        <p>"View and manage your coverage details below."</p>
                    </section>

                    <div class="dashboard-tabs">
                        <button
                            class="dashboard-tabs__tab"
                            class=("dashboard-tabs__tab--active", move || tab.get() == DashboardTab::Overview)
                            on:click=move |_| tab.set(DashboardTab::Overview)
                        >
                            "Overview"
                        </button>
                        <button
                            class="dashboard-tabs__tab"
                            class=("dashboard-tabs__tab--active", move || tab.get() == DashboardTab::Settings)
                            on:click=move |_| tab.set(DashboardTab::Settings)
                        >
                            "Settings"
                        </button>
                    </div>

                    {move || match tab.get() {
                        DashboardTab::Overview => view! {
                            <div class="dashboard-overview">
                                <div class="stat-grid">
                                    {COVERAGE_STATS
                                        .into_iter()
                                        .map(|(label, value)| view! { <StatCard label=label value=value/> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <section class="activity">
                                    <h2>"Recent Activity"</h2>
                                    <ul class="activity__list">
                                        {RECENT_ACTIVITY
                                            .into_iter()
                                            .map(|(action, when)| view! {
                                                <li class="activity__row">
                                                    <span>{action}</span>
                                                    <span class="activity__when">{when}</span>
                                                </li>
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </section>
                            </div>
                        }
                            .into_any(),
                        DashboardTab::Settings => view! { <SettingsPanel/> }.into_any(),
                    }}
                </main>
            </div>
        }
        .into_any()
    }
}
