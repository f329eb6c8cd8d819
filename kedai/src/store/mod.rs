//! Application stores
//!
//! Explicit store objects owned by the app and passed by reference to
//! the screens that need them. Each store is the single owner of its
//! persistence side effects.

pub mod cart;
pub mod session;

pub use cart::CartStore;
pub use session::{Credential, SessionStore};
