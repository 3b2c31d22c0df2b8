//! Dashboard Load
//!
//! The dashboard issues five independent fetches and renders only when
//! all of them have landed. The join is all-or-nothing: any failure is
//! reported with the endpoint that caused it and no partial data
//! reaches the view.

use std::fmt;

use futures::join;

use crate::error::{ApiError, ApiResult};
use crate::models::DashboardData;

use super::ApiClient;

/// A dashboard load failure, tagged with the failing endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLoadError {
    pub endpoint: &'static str,
    pub error: ApiError,
}

impl fmt::Display for DashboardLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fetch failed: {}", self.endpoint, self.error)
    }
}

impl std::error::Error for DashboardLoadError {}

pub async fn load_dashboard(client: &ApiClient) -> Result<DashboardData, DashboardLoadError> {
    let (items, low_stock, value, movement, notifications) = join!(
        client.list_items(),
        client.low_stock_items(),
        client.inventory_value(),
        client.stock_movement(),
        client.list_notifications(),
    );

    Ok(DashboardData {
        items: tag("items", items)?,
        low_stock: tag("low-stock", low_stock)?,
        total_value: tag("inventory-value", value)?.total_inventory_value,
        stock_movement: tag("stock-movement", movement)?,
        notifications: tag("notifications", notifications)?,
    })
}

fn tag<T>(endpoint: &'static str, result: ApiResult<T>) -> Result<T, DashboardLoadError> {
    result.map_err(|error| DashboardLoadError { endpoint, error })
}
