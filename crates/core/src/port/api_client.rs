// API Client Port (Interface)
// Abstraction over the storefront backend's JSON-over-HTTP API

use async_trait::async_trait;
use thiserror::Error;

/// Network errors (transport or HTTP failure)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Backend API client
///
/// Paths are relative to the configured API base URL
/// (e.g. `api/cart/add`).
///
/// Implementations:
/// - ReqwestApiClient (infra-http)
/// - in-memory fakes in tests
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue a GET request and return the decoded JSON body
    ///
    /// # Errors
    /// - NetworkError::Transport if the request cannot be sent
    /// - NetworkError::Status on a non-2xx response
    /// - NetworkError::Decode if the body is not JSON
    async fn get(&self, path: &str) -> Result<serde_json::Value, NetworkError>;

    /// Issue a POST request with a JSON body and return the decoded JSON body
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, NetworkError>;
}
