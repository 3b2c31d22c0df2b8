//! UI Components
//!
//! Reusable Leptos components.

mod category_chart;
mod dashboard_page;
mod delete_confirm_button;
mod filter_bar;
mod inventory_page;
mod item_form;
mod login_page;
mod low_stock_panel;
mod notification_list;
mod sidebar;
mod stats_cards;
mod stock_movement_chart;

pub use category_chart::CategoryChart;
pub use dashboard_page::DashboardPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use inventory_page::InventoryPage;
pub use item_form::ItemForm;
pub use login_page::LoginPage;
pub use low_stock_panel::LowStockPanel;
pub use notification_list::NotificationList;
pub use sidebar::Sidebar;
pub use stats_cards::StatsCards;
pub use stock_movement_chart::StockMovementChart;
