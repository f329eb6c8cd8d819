//! Kedai - Kopi storefront terminal client
//!
//! Customer-facing ordering client: browse the menu, manage a cart,
//! check out, authenticate, and watch order status with an
//! estimated-ready countdown. All business logic lives behind the
//! remote ordering API; this app is presentation and state management.

pub mod app;
pub mod event;
pub mod order_watch;
pub mod route;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::App;
pub use event::AppEvent;
