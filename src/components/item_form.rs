//! Item Form
//!
//! Shared form for creating and editing inventory items. The category
//! select is fed by the server's category enumeration.

use leptos::prelude::*;

use crate::models::{InventoryItem, ItemDraft};

#[component]
pub fn ItemForm(
    title: &'static str,
    submit_label: &'static str,
    initial: Option<InventoryItem>,
    categories: ReadSignal<Vec<String>>,
    on_submit: Callback<ItemDraft>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = initial.as_ref().map(ItemDraft::from_item).unwrap_or_default();
    let (name, set_name) = signal(draft.name.clone());
    let (category, set_category) = signal(draft.category.clone());
    let (quantity, set_quantity) = signal(draft.quantity.to_string());
    let (minimum_stock, set_minimum_stock) = signal(draft.minimum_stock.to_string());
    let (unit_price, set_unit_price) = signal(draft.unit_price.to_string());
    let (location, set_location) = signal(draft.location.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            name: name.get(),
            category: category.get(),
            quantity: quantity.get().parse().unwrap_or(0),
            minimum_stock: minimum_stock.get().parse().unwrap_or(0),
            unit_price: unit_price.get().parse().unwrap_or(0.0),
            location: location.get(),
        };
        if draft.name.is_empty() || draft.category.is_empty() {
            return;
        }
        on_submit.run(draft);
    };

    view! {
        <form class="item-form" on:submit=submit>
            <h2>{title}</h2>
            <div class="item-form-grid">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    required
                />
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                    required
                >
                    <option value="">"Select Category"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| {
                            view! { <option value=category.clone()>{category.clone()}</option> }
                        }
                    />
                </select>
                <label>
                    "Quantity"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Minimum Stock"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || minimum_stock.get()
                        on:input=move |ev| set_minimum_stock.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Unit Price"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || unit_price.get()
                        on:input=move |ev| set_unit_price.set(event_target_value(&ev))
                        required
                    />
                </label>
                <label>
                    "Location"
                    <input
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="form-actions">
                <button type="submit">{submit_label}</button>
                <button type="button" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
