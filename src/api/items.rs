//! Item Endpoints
//!
//! Inventory CRUD plus the server's category enumeration. Writes return
//! acknowledgments only; callers re-fetch the list afterwards.

use super::{encode_path_segment, ApiClient};
use crate::error::ApiResult;
use crate::models::{InsertedId, InventoryItem, ItemDraft, ServerMessage};

impl ApiClient {
    pub async fn list_items(&self) -> ApiResult<Vec<InventoryItem>> {
        self.request("GET", "/api/items").await
    }

    pub async fn create_item(&self, draft: &ItemDraft) -> ApiResult<InsertedId> {
        self.request_with_body("POST", "/api/items", draft).await
    }

    /// PUT the document back whole; the server stamps `updated_at`.
    pub async fn update_item(&self, item: &InventoryItem) -> ApiResult<ServerMessage> {
        let path = format!("/api/items/{}", encode_path_segment(&item.id));
        self.request_with_body("PUT", &path, item).await
    }

    pub async fn delete_item(&self, item_id: &str) -> ApiResult<()> {
        let path = format!("/api/items/{}", encode_path_segment(item_id));
        self.request_no_content("DELETE", &path).await
    }

    /// Allowed categories for the add/edit forms, distinct from the
    /// categories observed in the current item list.
    pub async fn list_categories(&self) -> ApiResult<Vec<String>> {
        self.request("GET", "/api/categories").await
    }
}
