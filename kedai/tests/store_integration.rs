// kedai/tests/store_integration.rs

use kedai::order_watch::OrderWatch;
use kedai::storage::{CART_RECORD, JsonRecord, SESSION_RECORD};
use kedai::store::{CartStore, SessionStore};
use shared::client::UserInfo;
use shared::models::{MenuItem, Order, OrderStatus, ServiceType};
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

#[test]
fn cart_survives_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut cart = CartStore::load(JsonRecord::new(dir.path(), CART_RECORD));
        cart.add_item(&item(1, 20000));
        cart.add_item(&item(1, 20000));
        cart.add_item(&item(2, 15000));
        assert_eq!(cart.total_price(), 55000);
    }

    // a fresh process start reads the same record
    let mut cart = CartStore::load(JsonRecord::new(dir.path(), CART_RECORD));
    assert_eq!(cart.total_item_count(), 3);
    assert_eq!(cart.total_price(), 55000);

    cart.remove_item(2);
    assert_eq!(cart.total_price(), 40000);
}

#[test]
fn cart_and_session_records_are_independent() {
    let dir = TempDir::new().unwrap();

    let mut cart = CartStore::load(JsonRecord::new(dir.path(), CART_RECORD));
    cart.add_item(&item(1, 20000));

    let mut session = SessionStore::load(JsonRecord::new(dir.path(), SESSION_RECORD));
    session.sign_in(
        "tok-1".to_string(),
        UserInfo {
            id: 1,
            username: "dewi".to_string(),
            name: "Dewi".to_string(),
            email: None,
        },
    );

    // signing out must not touch the cart record
    session.sign_out();

    let cart = CartStore::load(JsonRecord::new(dir.path(), CART_RECORD));
    assert_eq!(cart.total_item_count(), 1);
    let session = SessionStore::load(JsonRecord::new(dir.path(), SESSION_RECORD));
    assert!(!session.is_signed_in());
}

#[test]
fn countdown_expiry_shows_ready_without_touching_status() {
    const T: i64 = 1_722_945_600_000;
    let order = Order {
        id: "ord-7".to_string(),
        status: OrderStatus::Processing,
        created_at: T,
        estimated_minutes: Some(15),
        service: ServiceType::Takeaway,
        table: None,
        items: vec![],
        total: 55000,
    };

    let mut watch = OrderWatch::new("ord-7");
    watch.on_order(order, T);

    // one second past the estimate
    watch.on_tick(T + 15 * 60_000 + 1_000);
    assert!(watch.remaining_secs().unwrap() <= 0);
    assert!(watch.locally_ready());
    // the authoritative status is untouched
    assert_eq!(watch.order().unwrap().status, OrderStatus::Processing);
}
