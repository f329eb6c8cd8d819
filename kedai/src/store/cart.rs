//! Cart store
//!
//! In-memory reducer over the shopper's cart lines, mirrored to a
//! persisted record after every mutation. Lines are keyed by menu item
//! id; quantities never persist at zero or below (the line is removed).

use crate::storage::JsonRecord;
use shared::cart::CartLine;
use shared::models::MenuItem;

/// The shopper's in-progress selection
pub struct CartStore {
    lines: Vec<CartLine>,
    record: JsonRecord,
}

impl CartStore {
    /// Initialize from the persisted record; missing or corrupt data is
    /// an empty cart
    pub fn load(record: JsonRecord) -> Self {
        let lines: Vec<CartLine> = record.load().unwrap_or_default();
        if !lines.is_empty() {
            tracing::debug!(lines = lines.len(), "Restored persisted cart");
        }
        Self { lines, record }
    }

    /// Add a menu item: increment the existing line or append a new one
    /// with quantity 1
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_item(item)),
        }
        self.persist();
    }

    /// Increase a line's quantity by one; no-op on absent ids
    pub fn increment(&mut self, id: i64) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity += 1;
            self.persist();
        }
    }

    /// Decrease a line's quantity by one, removing the line at zero;
    /// no-op on absent ids
    pub fn decrement(&mut self, id: i64) {
        let Some(idx) = self.lines.iter().position(|l| l.id == id) else {
            return;
        };
        if self.lines[idx].quantity <= 1 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity -= 1;
        }
        self.persist();
    }

    /// Delete a line unconditionally; no-op if absent
    pub fn remove_item(&mut self, id: i64) {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.persist();
        }
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn total_item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of unit price times quantity, in minor currency units
    pub fn total_price(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Mirror the full state to storage; a failed write is logged and
    /// never surfaced to the caller
    fn persist(&self) {
        if let Err(e) = self.record.save(&self.lines) {
            tracing::warn!("Failed to persist cart: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CART_RECORD;
    use tempfile::TempDir;

    fn item(id: i64, price: i64) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {}", id),
            description: None,
            image_url: None,
            price,
            category: 1,
            is_available: true,
        }
    }

    fn fresh_store(dir: &TempDir) -> CartStore {
        CartStore::load(JsonRecord::new(dir.path(), CART_RECORD))
    }

    #[test]
    fn test_add_distinct_items() {
        let dir = TempDir::new().unwrap();
        let mut cart = fresh_store(&dir);

        cart.add_item(&item(1, 20000));
        cart.add_item(&item(2, 15000));
        cart.add_item(&item(3, 18000));

        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price(), 53000);
    }

    #[test]
    fn test_add_same_item_merges_lines() {
        let dir = TempDir::new().unwrap();
        let mut cart = fresh_store(&dir);

        cart.add_item(&item(1, 20000));
        cart.add_item(&item(1, 20000));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let dir = TempDir::new().unwrap();
        let mut cart = fresh_store(&dir);

        cart.add_item(&item(1, 20000));
        cart.increment(1);
        cart.decrement(1);
        cart.decrement(1);
        assert!(cart.is_empty());

        // absent id is a no-op
        cart.decrement(1);
        cart.decrement(99);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let mut cart = fresh_store(&dir);

        cart.add_item(&item(1, 20000));
        cart.add_item(&item(2, 15000));
        cart.remove_item(2);
        assert_eq!(cart.total_price(), 20000);

        cart.remove_item(42); // no-op
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_example_scenario() {
        // [{id:1, price:20000, qty:2}, {id:2, price:15000, qty:1}]
        let dir = TempDir::new().unwrap();
        let mut cart = fresh_store(&dir);

        cart.add_item(&item(1, 20000));
        cart.add_item(&item(1, 20000));
        cart.add_item(&item(2, 15000));

        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price(), 55000);

        cart.remove_item(2);
        assert_eq!(cart.total_price(), 40000);
    }

    #[test]
    fn test_persisted_state_round_trips() {
        let dir = TempDir::new().unwrap();
        {
            let mut cart = fresh_store(&dir);
            cart.add_item(&item(1, 20000));
            cart.add_item(&item(1, 20000));
            cart.add_item(&item(2, 15000));
        }

        let reloaded = fresh_store(&dir);
        assert_eq!(reloaded.lines().len(), 2);
        assert_eq!(reloaded.total_item_count(), 3);
        assert_eq!(reloaded.total_price(), 55000);
        assert_eq!(reloaded.lines()[0].id, 1);
        assert_eq!(reloaded.lines()[0].quantity, 2);
    }

    #[test]
    fn test_corrupt_record_is_empty_cart() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CART_RECORD), "][").unwrap();

        let cart = fresh_store(&dir);
        assert!(cart.is_empty());
    }
}
