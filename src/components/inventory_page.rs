//! Inventory Page
//!
//! Item management: table, add form, edit modal, delete with inline
//! confirmation. Writes are sequential and each success triggers a full
//! item re-fetch; nothing is merged optimistically.

use futures::join;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{DeleteConfirmButton, ItemForm};
use crate::context::AppContext;
use crate::models::{InventoryItem, ItemDraft};

#[component]
pub fn InventoryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");

    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (categories, set_categories) = signal(Vec::<String>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (adding, set_adding) = signal(false);
    let (editing, set_editing) = signal::<Option<InventoryItem>>(None);

    // Items and the category enumeration load together; the categories
    // feed the add/edit form selects.
    let load_client = client.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if load_client.require_session().is_err() {
            return;
        }
        let client = load_client.clone();
        set_loading.set(true);
        spawn_local(async move {
            let (items, categories) = join!(client.list_items(), client.list_categories());
            match (items, categories) {
                (Ok(items), Ok(categories)) => {
                    set_items.set(items);
                    set_categories.set(categories);
                    set_error.set(None);
                }
                (Err(e), _) | (_, Err(e)) => {
                    if !e.is_auth_loss() {
                        set_error.set(Some(e.to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let add_client = client.clone();
    let submit_add = Callback::new(move |draft: ItemDraft| {
        let client = add_client.clone();
        spawn_local(async move {
            match client.create_item(&draft).await {
                Ok(_) => {
                    set_adding.set(false);
                    ctx.reload();
                }
                Err(e) if !e.is_auth_loss() => set_error.set(Some(e.to_string())),
                Err(_) => {}
            }
        });
    });

    let edit_client = client.clone();
    let submit_edit = Callback::new(move |draft: ItemDraft| {
        let Some(item) = editing.get_untracked() else {
            return;
        };
        let updated = draft.apply_to(&item);
        let client = edit_client.clone();
        spawn_local(async move {
            match client.update_item(&updated).await {
                Ok(_) => {
                    set_editing.set(None);
                    ctx.reload();
                }
                Err(e) if !e.is_auth_loss() => set_error.set(Some(e.to_string())),
                Err(_) => {}
            }
        });
    });

    let delete_client = client.clone();
    let delete_item = Callback::new(move |item_id: String| {
        let client = delete_client.clone();
        spawn_local(async move {
            match client.delete_item(&item_id).await {
                Ok(()) => ctx.reload(),
                Err(e) if !e.is_auth_loss() => set_error.set(Some(e.to_string())),
                Err(_) => {}
            }
        });
    });

    view! {
        <h1>"Inventory Management"</h1>

        {move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })}

        <Show when=move || loading.get()>
            <div class="loading">"Loading..."</div>
        </Show>

        <Show when=move || !loading.get()>
            <Show
                when=move || adding.get()
                fallback=move || {
                    view! {
                        <button class="add-btn" on:click=move |_| set_adding.set(true)>
                            "Add New Item"
                        </button>
                    }
                }
            >
                <ItemForm
                    title="Add New Item"
                    submit_label="Add Item"
                    initial=None
                    categories=categories
                    on_submit=submit_add
                    on_cancel=Callback::new(move |_| set_adding.set(false))
                />
            </Show>

            <div class="panel">
                <h2>"Inventory Items"</h2>
                <table class="item-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Quantity"</th>
                            <th>"Minimum Stock"</th>
                            <th>"Unit Price"</th>
                            <th>"Location"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|item| item.id.clone()
                            children=move |item| {
                                let edit_item = item.clone();
                                let delete_id = item.id.clone();
                                let price = format!("${:.2}", item.unit_price);
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.category.clone()}</td>
                                        <td>{item.quantity}</td>
                                        <td>{item.minimum_stock}</td>
                                        <td>{price}</td>
                                        <td>{item.location.clone()}</td>
                                        <td class="actions">
                                            <button
                                                class="edit-btn"
                                                on:click=move |_| set_editing.set(Some(edit_item.clone()))
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                                delete_item.run(delete_id.clone())
                                            }) />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>

        {move || editing.get().map(|item| {
            view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <ItemForm
                            title="Edit Item"
                            submit_label="Save Changes"
                            initial=Some(item)
                            categories=categories
                            on_submit=submit_edit
                            on_cancel=Callback::new(move |_| set_editing.set(None))
                        />
                    </div>
                </div>
            }
        })}
    }
}
