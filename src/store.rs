//! Global Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! populated only by a fully successful dashboard load; the one local
//! mutation is dropping an acknowledged notification.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DashboardData, InventoryItem, Notification, StockMovementPoint};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Full item list
    pub items: Vec<InventoryItem>,
    /// Server-classified low-stock subset
    pub low_stock: Vec<InventoryItem>,
    /// Server-computed total inventory value
    pub total_value: f64,
    /// Daily update series
    pub stock_movement: Vec<StockMovementPoint>,
    /// Undismissed notifications
    pub notifications: Vec<Notification>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole store after a successful load.
pub fn store_set_dashboard(store: &DashboardStore, data: DashboardData) {
    *store.items().write() = data.items;
    *store.low_stock().write() = data.low_stock;
    *store.total_value().write() = data.total_value;
    *store.stock_movement().write() = data.stock_movement;
    *store.notifications().write() = data.notifications;
}

/// Drop a dismissed notification without a re-fetch.
pub fn store_remove_notification(store: &DashboardStore, notification_id: &str) {
    store
        .notifications()
        .write()
        .retain(|notification| notification.id != notification_id);
}
