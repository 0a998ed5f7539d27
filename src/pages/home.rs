//! Marketing landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::NavBar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <NavBar/>

            <section class="hero">
                <h1 class="hero__title">"Insurance coverage, finally understandable."</h1>
                <p class="hero__subtitle">
                    "Track your policies, claims, and payments in one place — and know exactly what you're covered for."
                </p>
                <div class="hero__actions">
                    <a class="hero__cta" href="/signup">
                        "Get Covered Today"
                    </a>
                    <a class="hero__secondary" href="/learn-more">
                        "See how it works"
                    </a>
                </div>
            </section>

            <section class="stats-band">
                <div class="stats-band__item">
                    <span class="stats-band__value">"12,000+"</span>
                    <span class="stats-band__label">"Policies managed"</span>
                </div>
                <div class="stats-band__item">
                    <span class="stats-band__value">"98%"</span>
                    <span class="stats-band__label">"Claims resolved"</span>
                </div>
                <div class="stats-band__item">
                    <span class="stats-band__value">"24/7"</span>
                    <span class="stats-band__label">"Coverage support"</span>
                </div>
            </section>

            <section class="features">
                <div class="feature-card">
                    <h3>"Every policy in one view"</h3>
                    <p>"Home, auto, and life coverage side by side, with renewal dates you can't miss."</p>
                </div>
                <div class="feature-card">
                    <h3>"Claims without the runaround"</h3>
                    <p>"File and follow claims from your dashboard instead of a phone queue."</p>
                </div>
                <div class="feature-card">
                    <h3>"Payments on your schedule"</h3>
                    <p>"See the next payment before it's due and keep coverage from lapsing."</p>
                </div>
            </section>

            <section class="cta-band">
                <h2>"Ready to take control of your coverage?"</h2>
                <a class="hero__cta" href="/signup">
                    "Create your account"
                </a>
            </section>

            <Footer/>
        </div>
    }
}
