//! HTTP client for network-based API calls

use crate::{ApiResponse, ClientConfig, ClientError, ClientResult, LoginResponse, RegisterRequest, UserInfo};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Category, MenuItem, Order, OrderCreate};

/// HTTP client for making network requests to the ordering API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the authentication token in place
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "GET");
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "POST");
        let mut request = self.client.post(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap the data field of a success envelope
    fn unwrap_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
        response
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = shared::client::LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post::<ApiResponse<LoginResponse>, _>("api/auth/login", &request)
            .await?;
        Self::unwrap_data(response, "login")
    }

    /// Register a new customer account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<LoginResponse> {
        let response = self
            .post::<ApiResponse<LoginResponse>, _>("api/auth/register", request)
            .await?;
        Self::unwrap_data(response, "register")
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        let response = self.get::<ApiResponse<UserInfo>>("api/auth/me").await?;
        Self::unwrap_data(response, "user")
    }

    /// Logout
    pub async fn logout(&mut self) -> ClientResult<()> {
        self.post_empty::<ApiResponse<()>>("api/auth/logout").await?;
        self.token = None;
        Ok(())
    }

    // ========== Menu API ==========

    /// List menu categories
    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let response = self
            .get::<ApiResponse<Vec<Category>>>("api/menu/categories")
            .await?;
        Self::unwrap_data(response, "categories")
    }

    /// List menu items, optionally filtered by category
    pub async fn menu_items(&self, category: Option<i64>) -> ClientResult<Vec<MenuItem>> {
        let path = match category {
            Some(id) => format!("api/menu/items?category={}", id),
            None => "api/menu/items".to_string(),
        };
        let response = self.get::<ApiResponse<Vec<MenuItem>>>(&path).await?;
        Self::unwrap_data(response, "menu")
    }

    // ========== Order API ==========

    /// Create an order from the given payload
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<Order> {
        let response = self
            .post::<ApiResponse<Order>, _>("api/orders", payload)
            .await?;
        Self::unwrap_data(response, "order")
    }

    /// Fetch a single order by id
    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        let response = self
            .get::<ApiResponse<Order>>(&format!("api/orders/{}", id))
            .await?;
        Self::unwrap_data(response, "order")
    }

    /// Fetch the current user's order history
    pub async fn order_history(&self) -> ClientResult<Vec<Order>> {
        let response = self.get::<ApiResponse<Vec<Order>>>("api/orders").await?;
        Self::unwrap_data(response, "orders")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_requires_token() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080"));
        assert_eq!(client.auth_header(), None);

        let client = client.with_token("abc123");
        assert_eq!(client.auth_header(), Some("Bearer abc123".to_string()));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:8080/"));
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_unwrap_data_rejects_empty_envelope() {
        let empty = ApiResponse::<i32> {
            code: "E0000".to_string(),
            message: "Success".to_string(),
            data: None,
        };
        let err = HttpClient::unwrap_data(empty, "order").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));

        let full = ApiResponse::ok(42);
        assert_eq!(HttpClient::unwrap_data(full, "order").unwrap(), 42);
    }
}
