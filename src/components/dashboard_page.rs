//! Dashboard Page
//!
//! Loads the five dashboard resources in one all-or-nothing pass and
//! renders stats, charts, the filtered item table, and notifications.
//! Any failed sub-fetch fails the whole load; the view never shows a
//! partially populated dashboard.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::aggregate;
use crate::api::{self, ApiClient};
use crate::components::{
    CategoryChart, FilterBar, LowStockPanel, NotificationList, StatsCards, StockMovementChart,
};
use crate::context::AppContext;
use crate::dates;
use crate::store::{store_set_dashboard, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");
    let store = use_dashboard_store();

    let (loading, set_loading) = signal(true);
    let (load_failed, set_load_failed) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (search_term, set_search_term) = signal(String::new());
    let (filter_category, set_filter_category) = signal(String::new());
    let (filter_date, set_filter_date) = signal(String::new());

    // Full load on mount and whenever something bumps the reload trigger.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if client.require_session().is_err() {
            return;
        }
        let client = client.clone();
        set_loading.set(true);
        set_load_failed.set(false);
        set_error.set(None);
        spawn_local(async move {
            match api::load_dashboard(&client).await {
                Ok(data) => {
                    web_sys::console::log_1(
                        &format!(
                            "[DASH] loaded {} items, {} notifications",
                            data.items.len(),
                            data.notifications.len()
                        )
                        .into(),
                    );
                    store_set_dashboard(&store, data);
                }
                Err(failure) => {
                    web_sys::console::error_1(&format!("[DASH] {}", failure).into());
                    if !failure.error.is_auth_loss() {
                        set_load_failed.set(true);
                        set_error.set(Some("Failed to fetch dashboard data".to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let categories = Memo::new(move |_| aggregate::distinct_categories(&store.items().get()));
    let filtered = Memo::new(move |_| {
        let day = NaiveDate::parse_from_str(&filter_date.get(), "%Y-%m-%d").ok();
        aggregate::filter_items(
            &store.items().get(),
            &search_term.get(),
            &filter_category.get(),
            day,
        )
    });

    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Loading dashboard..."</div>
        </Show>
        {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}
        <Show when=move || !loading.get() && !load_failed.get()>
            <h1>"Inventory Dashboard"</h1>

            <FilterBar
                search_term=search_term
                set_search_term=set_search_term
                filter_category=filter_category
                set_filter_category=set_filter_category
                filter_date=filter_date
                set_filter_date=set_filter_date
                categories=categories
            />

            <StatsCards />

            <div class="chart-row">
                <CategoryChart />
                <StockMovementChart />
            </div>

            <LowStockPanel />

            <div class="panel">
                <h3>"Inventory Items"</h3>
                <table class="item-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Quantity"</th>
                            <th>"Last Updated"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || filtered.get()
                            key=|item| item.id.clone()
                            children=move |item| {
                                let updated = dates::format_timestamp(&item.updated_at);
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.category.clone()}</td>
                                        <td>{item.quantity}</td>
                                        <td>{updated}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>

            <NotificationList on_error=set_error />
        </Show>
    }
}
