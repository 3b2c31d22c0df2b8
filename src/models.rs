//! Frontend Models
//!
//! Record types for each API endpoint response, parsed at the boundary.

use serde::{Deserialize, Serialize};

/// Inventory item document as stored by the backend. `created_at` and
/// `created_by` ride along when present so updates can send the document
/// back whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub minimum_stock: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub location: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Editable field subset shared by the add and edit forms. Doubles as
/// the POST body for item creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub minimum_stock: u32,
    pub unit_price: f64,
    pub location: String,
}

impl ItemDraft {
    /// Prefill the form from an existing item.
    pub fn from_item(item: &InventoryItem) -> Self {
        ItemDraft {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            minimum_stock: item.minimum_stock,
            unit_price: item.unit_price,
            location: item.location.clone(),
        }
    }

    /// Merge edited fields back into the stored document for an update.
    pub fn apply_to(&self, item: &InventoryItem) -> InventoryItem {
        InventoryItem {
            id: item.id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity,
            minimum_stock: self.minimum_stock,
            unit_price: self.unit_price,
            location: self.location.clone(),
            updated_at: item.updated_at.clone(),
            created_at: item.created_at.clone(),
            created_by: item.created_by.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    pub message: String,
    pub created_at: String,
}

/// `GET /api/analytics/inventory-value` response. The backend's
/// aggregation key is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InventoryValue {
    pub total_inventory_value: f64,
}

/// One calendar day of the stock-movement series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovementPoint {
    #[serde(rename = "_id")]
    pub day: String,
    pub total_items: u32,
    pub average_quantity: f64,
}

/// Login / register request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `{"_id": ...}` acknowledgment for created documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsertedId {
    #[serde(rename = "_id")]
    pub id: String,
}

/// `{"message": ...}` acknowledgment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerMessage {
    pub message: String,
}

/// Share of one category in the current item list (client-computed).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub percent: f64,
}

/// Joined result of the five dashboard fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub items: Vec<InventoryItem>,
    pub low_stock: Vec<InventoryItem>,
    pub total_value: f64,
    pub stock_movement: Vec<StockMovementPoint>,
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_parses_backend_document() {
        let raw = r#"{
            "_id": "671422c59afb57b6fb93e026",
            "name": "Printer",
            "category": "Technology Accessories",
            "quantity": 2,
            "minimum_stock": 1,
            "unit_price": 100.0,
            "location": "Lounge",
            "created_at": "Sat, 19 Oct 2024 20:11:00 GMT",
            "created_by": "67140f370b9880c72059d86f",
            "updated_at": "Sat, 19 Oct 2024 21:21:09 GMT"
        }"#;
        let item: InventoryItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, "671422c59afb57b6fb93e026");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.minimum_stock, 1);
        assert_eq!(item.created_by.as_deref(), Some("67140f370b9880c72059d86f"));
    }

    #[test]
    fn item_tolerates_missing_audit_fields() {
        let raw = r#"{
            "_id": "a1",
            "name": "Stapler",
            "category": "Writing Tools",
            "quantity": 12,
            "minimum_stock": 3,
            "unit_price": 4.5,
            "updated_at": "2024-10-19T21:21:09+00:00"
        }"#;
        let item: InventoryItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.location, "");
        assert_eq!(item.created_at, None);
        let round_trip = serde_json::to_string(&item).unwrap();
        assert!(!round_trip.contains("created_at"));
    }

    #[test]
    fn inventory_value_ignores_grouping_key() {
        let value: InventoryValue =
            serde_json::from_str(r#"{"_id": null, "total_inventory_value": 1234.5}"#).unwrap();
        assert_eq!(value.total_inventory_value, 1234.5);
    }

    #[test]
    fn movement_point_maps_grouping_key_to_day() {
        let point: StockMovementPoint = serde_json::from_str(
            r#"{"_id": "2024-10-19", "total_items": 4, "average_quantity": 7.25}"#,
        )
        .unwrap();
        assert_eq!(point.day, "2024-10-19");
        assert_eq!(point.total_items, 4);
    }

    #[test]
    fn draft_round_trips_through_an_item() {
        let item: InventoryItem = serde_json::from_str(
            r#"{
                "_id": "a1",
                "name": "Stapler",
                "category": "Writing Tools",
                "quantity": 12,
                "minimum_stock": 3,
                "unit_price": 4.5,
                "location": "Shelf B",
                "created_at": "2024-09-01T08:00:00+00:00",
                "created_by": "u1",
                "updated_at": "2024-10-19T21:21:09+00:00"
            }"#,
        )
        .unwrap();
        let mut draft = ItemDraft::from_item(&item);
        draft.quantity = 20;
        draft.location = "Shelf C".to_string();
        let updated = draft.apply_to(&item);
        assert_eq!(updated.id, item.id);
        assert_eq!(updated.quantity, 20);
        assert_eq!(updated.location, "Shelf C");
        assert_eq!(updated.created_by, item.created_by);
    }
}
