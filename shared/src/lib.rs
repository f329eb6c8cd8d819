//! Shared types for the Kopi ordering platform
//!
//! Common types used by both the API client and the storefront app:
//! menu and order models, request/response DTOs, the API response
//! envelope, and cart line types.

pub mod cart;
pub mod client;
pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use cart::CartLine;
pub use models::{
    Category, MenuItem, Order, OrderCreate, OrderCreateItem, OrderItem, OrderStatus, ServiceType,
};
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
