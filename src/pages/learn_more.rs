//! Marketing detail page on coverage plans.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;

#[component]
pub fn LearnMorePage() -> impl IntoView {
    view! {
        <div class="learn-more-page">
            <NavBar/>

            <section class="learn-more__intro">
                <h1>"How GetCovered.io works"</h1>
                <p>
                    "We connect to your existing policies and turn the fine print into a dashboard: what you're covered for, what it costs, and what to do when something goes wrong."
                </p>
            </section>

            <section class="learn-more__section">
                <h2>"One dashboard for every policy"</h2>
                <p>
                    "Link home, auto, renters, and life policies from any carrier. We keep coverage amounts, deductibles, and renewal dates current so you never discover a lapse the hard way."
                </p>
            </section>

            <section class="learn-more__section">
                <h2>"Claims, tracked end to end"</h2>
                <p>
                    "File a claim in minutes and watch it move from submitted to processed. Every status change shows up in your recent activity, with no hold music involved."
                </p>
            </section>

            <section class="learn-more__section">
                <h2>"Built for households and teams"</h2>
                <p>
                    "Share read access with family members, or use the admin tools to manage coverage for a whole organization from a single account."
                </p>
            </section>

            <section class="cta-band">
                <h2>"See your coverage clearly."</h2>
                <a class="hero__cta" href="/signup">
                    "Get started free"
                </a>
            </section>

            <Footer/>
        </div>
    }
}
