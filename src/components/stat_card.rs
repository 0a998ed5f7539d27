//! Single coverage statistic card for dashboard grids.

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}
