// reqwest ApiClient implementation
// reason: reqwest for async HTTP with JSON bodies and timeouts (ADR-001)
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;
use tracing::{debug, warn};

use storefront_core::config::StorefrontConfig;
use storefront_core::port::api_client::{ApiClient, NetworkError};

/// Longest error body kept in NetworkError::Status
const MAX_ERROR_BODY_CHARS: usize = 512;

/// HTTP client for the storefront backend
///
/// Endpoint paths are resolved against `base_url`
/// (`http://host/` + `api/cart/add`).
pub struct ReqwestApiClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl ReqwestApiClient {
    /// Build a client for `base_url`
    ///
    /// # Errors
    /// - NetworkError::InvalidUrl if `base_url` does not parse
    /// - NetworkError::Transport if the underlying client cannot be built
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, NetworkError> {
        let base_url = parse_base_url(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| NetworkError::Transport(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &StorefrontConfig) -> Result<Self, NetworkError> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, NetworkError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", path, e)))
    }

    fn map_error(&self, err: reqwest::Error) -> NetworkError {
        if err.is_timeout() {
            NetworkError::Timeout(self.timeout.as_millis() as u64)
        } else if err.is_decode() {
            NetworkError::Decode(err.to_string())
        } else {
            NetworkError::Transport(err.to_string())
        }
    }

    async fn read_json(&self, response: Response) -> Result<serde_json::Value, NetworkError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            warn!(status = status.as_u16(), "Backend returned error status");
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.map_error(e))?;
        serde_json::from_slice(&bytes).map_err(|e| NetworkError::Decode(e.to_string()))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, NetworkError> {
    let mut normalized = base_url.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    let url = Url::parse(&normalized)
        .map_err(|e| NetworkError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NetworkError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            other, base_url
        ))),
    }
}

#[async_trait]
impl ApiClient for ReqwestApiClient {
    async fn get(&self, path: &str) -> Result<serde_json::Value, NetworkError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        self.read_json(response).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, NetworkError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        self.read_json(response).await
    }
}
