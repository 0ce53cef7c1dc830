//! Stat Card Component

use leptos::prelude::*;

use crate::models::StatItem;

#[component]
pub fn StatCard(stat: StatItem) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div>
                <p class="stat-label">{stat.label}</p>
                <p class="stat-value">{stat.value}</p>
            </div>
            <span class="stat-trend">{stat.trend}</span>
        </div>
    }
}
