//! Stats Cards
//!
//! Headline numbers: total items, total value, low-stock count, and the
//! number of categories in use.

use leptos::prelude::*;

use crate::aggregate;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_dashboard_store();
    let category_count = Memo::new(move |_| aggregate::category_counts(&store.items().get()).len());

    view! {
        <div class="stats-cards">
            <div class="stat-card">
                <h3>"Total Items"</h3>
                <div class="stat-value">{move || store.items().get().len()}</div>
            </div>
            <div class="stat-card">
                <h3>"Total Value"</h3>
                <div class="stat-value">
                    {move || format!("${:.2}", store.total_value().get())}
                </div>
            </div>
            <div class="stat-card">
                <h3>"Low Stock Items"</h3>
                <div class="stat-value">{move || store.low_stock().get().len()}</div>
            </div>
            <div class="stat-card">
                <h3>"Categories"</h3>
                <div class="stat-value">{move || category_count.get()}</div>
            </div>
        </div>
    }
}
