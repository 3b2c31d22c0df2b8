//! Analytics Endpoints
//!
//! Server-computed aggregates consumed verbatim: the client renders
//! these, it does not recompute them.

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{InventoryItem, InventoryValue, StockMovementPoint};

impl ApiClient {
    /// Items the server classifies as below their minimum stock.
    pub async fn low_stock_items(&self) -> ApiResult<Vec<InventoryItem>> {
        self.request("GET", "/api/analytics/low-stock").await
    }

    pub async fn inventory_value(&self) -> ApiResult<InventoryValue> {
        self.request("GET", "/api/analytics/inventory-value").await
    }

    /// Daily update counts over the server's default trailing window.
    pub async fn stock_movement(&self) -> ApiResult<Vec<StockMovementPoint>> {
        self.request("GET", "/api/analytics/stock-movement").await
    }
}
