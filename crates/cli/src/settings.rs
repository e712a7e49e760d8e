//! Configuration loading
//!
//! Precedence (lowest to highest): built-in defaults, TOML file,
//! `STOREFRONT_*` environment variables, command-line flags.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use storefront_core::config::StorefrontConfig;

const ENV_PREFIX: &str = "STOREFRONT";

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_base_url: Option<String>,
    pub reference_site: Option<String>,
}

/// `~/.config/storefront/config.toml` (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "storefront").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load and validate configuration
///
/// An explicit `file` must exist; the default location is optional.
pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<StorefrontConfig> {
    let mut builder = Config::builder();

    match file {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
        }
        None => {
            if let Some(path) = default_config_path() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }
    }

    let mut config: StorefrontConfig = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")?;

    if let Some(url) = &overrides.api_base_url {
        config.api_base_url = url.clone();
    }
    if let Some(site) = &overrides.reference_site {
        config.reference_site = site.clone();
    }

    config.validate()?;
    tracing::debug!(?config, "Configuration loaded");

    Ok(config)
}
