//! Filter Bar
//!
//! Search, category, and update-date filters for the dashboard table.
//! The category options come from the current item list, not the
//! server's enumeration.

use leptos::prelude::*;

#[component]
pub fn FilterBar(
    search_term: ReadSignal<String>,
    set_search_term: WriteSignal<String>,
    filter_category: ReadSignal<String>,
    set_filter_category: WriteSignal<String>,
    filter_date: ReadSignal<String>,
    set_filter_date: WriteSignal<String>,
    categories: Memo<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="text"
                placeholder="Search items..."
                prop:value=move || search_term.get()
                on:input=move |ev| set_search_term.set(event_target_value(&ev))
            />
            <select
                prop:value=move || filter_category.get()
                on:change=move |ev| set_filter_category.set(event_target_value(&ev))
            >
                <option value="">"All Categories"</option>
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        view! { <option value=category.clone()>{category.clone()}</option> }
                    }
                />
            </select>
            <input
                type="date"
                prop:value=move || filter_date.get()
                on:input=move |ev| set_filter_date.set(event_target_value(&ev))
            />
        </div>
    }
}
