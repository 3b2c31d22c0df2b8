//! Application Context
//!
//! Shared navigation state provided via Leptos Context API. Navigation
//! is a plain signal switch between top-level views; there is no URL
//! router.

use leptos::prelude::*;

/// Top-level views.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Route {
    Login,
    Dashboard,
    Inventory,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Trigger to re-fetch the current view's data - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Trigger a re-fetch of the current view's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
