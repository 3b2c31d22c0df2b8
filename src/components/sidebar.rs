//! Sidebar
//!
//! Navigation between the data views plus sign-out.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::context::{AppContext, Route};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");

    view! {
        <nav class="sidebar">
            <button
                class=move || if ctx.route.get() == Route::Dashboard { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.navigate(Route::Dashboard)
            >
                "Dashboard"
            </button>
            <button
                class=move || if ctx.route.get() == Route::Inventory { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.navigate(Route::Inventory)
            >
                "Inventory"
            </button>
            <button class="sign-out-btn" on:click=move |_| client.sign_out()>
                "Sign Out"
            </button>
        </nav>
    }
}
