//! Cart line types
//!
//! A cart line is one menu item with an aggregated quantity. Lines are
//! uniquely keyed by menu item id; a line with zero quantity must not
//! exist (it is removed instead).

use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

/// One line of the shopper's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Menu item id
    pub id: i64,
    pub name: String,
    /// Unit price in minor currency units
    pub unit_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Create a fresh line (quantity 1) from a menu item
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            image_url: item.image_url.clone(),
            quantity: 1,
        }
    }

    /// Line total in minor currency units
    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> MenuItem {
        MenuItem {
            id: 1,
            name: "Kopi Tubruk".to_string(),
            description: None,
            image_url: Some("/img/tubruk.jpg".to_string()),
            price: 15000,
            category: 1,
            is_available: true,
        }
    }

    #[test]
    fn test_from_item_starts_at_quantity_one() {
        let line = CartLine::from_item(&item());
        assert_eq!(line.id, 1);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price, 15000);
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::from_item(&item());
        line.quantity = 3;
        assert_eq!(line.line_total(), 45000);
    }
}
