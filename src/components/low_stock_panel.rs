//! Low Stock Panel
//!
//! Server-classified low-stock alerts. Hidden entirely when there are
//! none.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn LowStockPanel() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <Show when=move || !store.low_stock().get().is_empty()>
            <div class="low-stock-panel">
                <h3>"Low Stock Alert"</h3>
                <div class="low-stock-grid">
                    <For
                        each=move || store.low_stock().get()
                        key=|item| item.id.clone()
                        children=move |item| {
                            view! {
                                <div class="low-stock-card">
                                    <span class="low-stock-name">{item.name.clone()}</span>
                                    <p>"Current stock: " {item.quantity}</p>
                                    <p>"Minimum required: " {item.minimum_stock}</p>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
