//! Notification List
//!
//! Server notifications with dismissal. A dismissed notification is
//! removed locally only after the delete is acknowledged; a failed
//! delete leaves the list alone and surfaces the error banner.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::dates;
use crate::store::{store_remove_notification, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn NotificationList(on_error: WriteSignal<Option<String>>) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");
    let store = use_dashboard_store();

    let dismiss = Callback::new(move |notification_id: String| {
        let client = client.clone();
        spawn_local(async move {
            match client.delete_notification(&notification_id).await {
                Ok(()) => store_remove_notification(&store, &notification_id),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[DASH] dismiss {} failed: {}", notification_id, e).into(),
                    );
                    if !e.is_auth_loss() {
                        on_error.set(Some("Failed to dismiss notification".to_string()));
                    }
                }
            }
        });
    });

    view! {
        <div class="notification-panel">
            <h3>"Notifications"</h3>
            <Show when=move || store.notifications().get().is_empty()>
                <p class="chart-empty">"No notifications"</p>
            </Show>
            <For
                each=move || store.notifications().get()
                key=|notification| notification.id.clone()
                children=move |notification| {
                    let id = notification.id.clone();
                    let created = dates::format_timestamp(&notification.created_at);
                    view! {
                        <div class="notification-row">
                            <div>
                                <p>{notification.message.clone()}</p>
                                <p class="notification-time">{created}</p>
                            </div>
                            <button class="dismiss-btn" on:click=move |_| dismiss.run(id.clone())>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
