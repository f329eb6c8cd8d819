//! Order Model
//!
//! Orders are owned by the server; the client only renders fetched
//! copies and submits `OrderCreate` payloads.

use crate::cart::CartLine;
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// `PENDING → PROCESSING → COMPLETED`, with `CANCELLED` reachable from
/// `PENDING` or `PROCESSING`. Transitions happen server-side only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order can still change state
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

/// Service type for an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    #[default]
    Takeaway,
    DineIn,
}

/// Order item - menu item snapshot taken at order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Unit price in minor currency units
    pub unit_price: i64,
    pub quantity: u32,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: Timestamp,
    /// Estimated preparation time; absent when the server has no estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<i64>,
    pub service: ServiceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub items: Vec<OrderItem>,
    /// Total in minor currency units
    pub total: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<OrderCreateItem>,
    pub service: ServiceType,
    /// Table number, required for dine-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One line of a create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreateItem {
    pub menu_item_id: i64,
    pub quantity: u32,
}

impl From<&CartLine> for OrderCreateItem {
    fn from(line: &CartLine) -> Self {
        Self {
            menu_item_id: line.id,
            quantity: line.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_format() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"PROCESSING\"");

        let status: OrderStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_order_create_item_from_cart_line() {
        let line = CartLine {
            id: 7,
            name: "Es Kopi Susu".to_string(),
            unit_price: 20000,
            image_url: None,
            quantity: 2,
        };
        let item = OrderCreateItem::from(&line);
        assert_eq!(item.menu_item_id, 7);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_order_missing_estimate_deserializes_as_none() {
        let json = r#"{
            "id": "ord-1",
            "status": "PENDING",
            "created_at": 1722945600000,
            "service": "TAKEAWAY",
            "items": [],
            "total": 0
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.estimated_minutes, None);
    }
}
