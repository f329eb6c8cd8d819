// kopi-client/tests/client_integration.rs

use kopi_client::{ClientConfig, ClientError, HttpClient};

#[tokio::test]
async fn test_client_creation() {
    let client = HttpClient::new(&ClientConfig::new("http://localhost:8080"));
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_config_builder() {
    let config = ClientConfig::new("http://kopi.example.com")
        .with_token("tok-1")
        .with_timeout(5);

    assert_eq!(config.base_url, "http://kopi.example.com");
    assert_eq!(config.token.as_deref(), Some("tok-1"));
    assert_eq!(config.timeout, 5);

    let client = config.build_http_client();
    assert_eq!(client.token(), Some("tok-1"));
}

#[tokio::test]
async fn test_token_replacement() {
    let mut client = HttpClient::new(&ClientConfig::default()).with_token("old");
    assert_eq!(client.token(), Some("old"));

    client.set_token(Some("new".to_string()));
    assert_eq!(client.token(), Some("new"));

    client.set_token(None);
    assert!(client.token().is_none());
}

#[tokio::test]
async fn test_unauthorized_detection() {
    assert!(ClientError::Unauthorized.is_unauthorized());
    assert!(!ClientError::NotFound("order".to_string()).is_unauthorized());
    assert!(!ClientError::Validation("empty".to_string()).is_unauthorized());
}

#[tokio::test]
async fn test_connection_refused_maps_to_http_error() {
    // Port 1 is never listening; the request fails before any response.
    let client = HttpClient::new(&ClientConfig::new("http://127.0.0.1:1").with_timeout(1));
    let err = client.categories().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
