//! Resolved runtime settings.

pub mod storage;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use marquee_core::{ApiUrl, Hero};
use marquee_http::DEFAULT_MOVIES_PATH;

use storage::StoredConfig;

/// API used when neither the flag, the environment nor the config file
/// names one.
pub const DEFAULT_API: &str = "http://localhost:5000";

/// Settings after merging flags, environment and the stored config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiUrl,
    pub movies_path: String,
    pub site: Option<Url>,
    pub timeout: Option<Duration>,
    pub hero: Hero,
}

impl Settings {
    /// Resolve settings, preferring `api_override` (flag or `MARQUEE_API`)
    /// over the stored config.
    pub fn resolve(api_override: Option<&str>) -> Result<Self> {
        let stored = storage::load_config().context("Failed to load config")?;
        Self::from_parts(api_override, stored)
    }

    fn from_parts(api_override: Option<&str>, stored: StoredConfig) -> Result<Self> {
        let raw_api = api_override
            .or(stored.api.as_deref())
            .unwrap_or(DEFAULT_API);
        let api = ApiUrl::new(raw_api).context("Invalid API URL")?;

        let site = stored
            .site
            .as_deref()
            .map(Url::parse)
            .transpose()
            .context("Invalid site URL in config")?;

        let settings = Self {
            api,
            movies_path: stored
                .movies_path
                .unwrap_or_else(|| DEFAULT_MOVIES_PATH.to_string()),
            site,
            timeout: stored.timeout_secs.map(Duration::from_secs),
            hero: stored.hero.unwrap_or_default(),
        };
        debug!(api = %settings.api, path = %settings.movies_path, "Resolved settings");
        Ok(settings)
    }
}
