//! Stockdeck App
//!
//! Top-level component: session-gated switch between the login page and
//! the two data views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, DEFAULT_API_BASE};
use crate::components::{DashboardPage, InventoryPage, LoginPage, Sidebar};
use crate::context::{AppContext, Route};
use crate::session::Session;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let session = Session::browser();

    // Entry view depends only on token presence.
    let initial = if session.is_authenticated() {
        Route::Dashboard
    } else {
        Route::Login
    };
    let (route, set_route) = signal(initial);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    provide_context(AppContext::new(
        (route, set_route),
        (reload_trigger, set_reload_trigger),
    ));
    provide_context(Store::new(DashboardState::default()));
    provide_context(ApiClient::new(session.clone(), DEFAULT_API_BASE, set_route));

    // Guard: protected views bounce to login when the token is gone.
    let guard_session = session.clone();
    Effect::new(move |_| {
        if route.get() != Route::Login && !guard_session.is_authenticated() {
            set_route.set(Route::Login);
        }
    });

    view! {
        <div class="app-layout">
            {move || match route.get() {
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Dashboard => view! {
                    <div class="shell">
                        <Sidebar />
                        <main class="main-content">
                            <DashboardPage />
                        </main>
                    </div>
                }.into_any(),
                Route::Inventory => view! {
                    <div class="shell">
                        <Sidebar />
                        <main class="main-content">
                            <InventoryPage />
                        </main>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
