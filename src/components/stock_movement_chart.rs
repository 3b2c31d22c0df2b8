//! Stock Movement Chart
//!
//! Daily update counts over the server's trailing window, as vertical
//! bars scaled against the busiest day.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn StockMovementChart() -> impl IntoView {
    let store = use_dashboard_store();
    let max_total = Memo::new(move |_| {
        store
            .stock_movement()
            .get()
            .iter()
            .map(|point| point.total_items)
            .max()
            .unwrap_or(0)
    });

    view! {
        <div class="chart-card">
            <h3>"Stock Movement"</h3>
            <Show when=move || store.stock_movement().get().is_empty()>
                <p class="chart-empty">"No movement in range"</p>
            </Show>
            <div class="movement-bars">
                <For
                    each=move || store.stock_movement().get()
                    key=|point| point.day.clone()
                    children=move |point| {
                        let day = point.day.clone();
                        let total = point.total_items;
                        let title = format!(
                            "{}: {} items, avg qty {:.1}",
                            point.day, point.total_items, point.average_quantity
                        );
                        let height = move || {
                            let max = max_total.get().max(1);
                            format!("height: {:.0}%", total as f64 * 100.0 / max as f64)
                        };
                        view! {
                            <div class="movement-col" title=title>
                                <div class="movement-bar" style=height></div>
                                <span class="movement-day">{day}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
