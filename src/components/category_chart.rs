//! Category Chart
//!
//! Distribution of items across categories, rendered as labelled share
//! bars.

use leptos::prelude::*;

use crate::aggregate;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn CategoryChart() -> impl IntoView {
    let store = use_dashboard_store();
    let shares = Memo::new(move |_| {
        aggregate::category_share(&aggregate::category_counts(&store.items().get()))
    });

    view! {
        <div class="chart-card">
            <h3>"Category Distribution"</h3>
            <Show when=move || shares.get().is_empty()>
                <p class="chart-empty">"No items yet"</p>
            </Show>
            <For
                each=move || shares.get()
                key=|share| share.category.clone()
                children=move |share| {
                    let width = format!("width: {:.1}%", share.percent);
                    let label = format!("{:.1}% ({})", share.percent, share.count);
                    view! {
                        <div class="share-row">
                            <span class="share-label">{share.category.clone()}</span>
                            <div class="share-track">
                                <div class="share-bar" style=width></div>
                            </div>
                            <span class="share-value">{label}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
