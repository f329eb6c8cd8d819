//! Kopi Client - HTTP client for the ordering API
//!
//! Provides typed network calls to the remote ordering service.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, RegisterRequest, UserInfo};
