//! Logging setup
//!
//! Diagnostics go to stderr so stdout stays clean for tables and JSON.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default: `storefront=info`)
//! - `STOREFRONT_LOG_FORMAT`: `json` or `pretty` (default: `pretty`)

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "storefront=info";

pub fn init(verbose: bool) -> Result<()> {
    let log_format =
        std::env::var("STOREFRONT_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let fallback = if verbose { "storefront=debug" } else { DEFAULT_FILTER };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .context("Failed to create env filter")?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match log_format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };

    installed.context("Failed to install tracing subscriber")
}
