// Storefront configuration (values only; loading lives in the composition root)

use crate::application::product_list::constants::DEFAULT_REFERENCE_SITE;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Backend root; endpoint paths are joined onto it
    pub api_base_url: String,
    /// Reference site whose catalog is shown
    pub reference_site: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            reference_site: DEFAULT_REFERENCE_SITE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Reject values the HTTP adapter cannot work with
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.reference_site.trim().is_empty() {
            return Err(AppError::Config("reference_site must not be empty".into()));
        }

        if !self
            .reference_site
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::Config(format!(
                "reference_site must be alphanumeric, got '{}'",
                self.reference_site
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be positive".into(),
            ));
        }

        Ok(())
    }
}
