//! Config subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use marquee_core::ApiUrl;

use crate::config::storage::{self, StoredConfig};
use crate::config::{DEFAULT_API, Settings};
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Display the resolved configuration
    Show,

    /// Store the movie API URL
    SetApi {
        /// Base URL, or file:// URL of a catalog file
        url: String,
    },

    /// Store the booking site URL used for full links
    SetSite {
        url: String,
    },

    /// Remove the stored configuration
    Reset,
}

pub fn handle(cmd: ConfigCommand) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(),
        ConfigSubcommand::SetApi { url } => update(|config| {
            ApiUrl::new(&url).context("Invalid API URL")?;
            config.api = Some(url);
            Ok(())
        }),
        ConfigSubcommand::SetSite { url } => update(|config| {
            url::Url::parse(&url).context("Invalid site URL")?;
            config.site = Some(url);
            Ok(())
        }),
        ConfigSubcommand::Reset => {
            storage::clear_config()?;
            output::success("Configuration reset");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let path = storage::config_path()?;
    let settings = Settings::resolve(None)?;

    output::field("Config", &path.display().to_string());
    output::field("API", settings.api.as_str());
    output::field("Movies path", &settings.movies_path);
    output::field(
        "Site",
        settings.site.as_ref().map_or("(none)", |s| s.as_str()),
    );
    output::field(
        "Timeout",
        &settings
            .timeout
            .map_or("(none)".to_string(), |t| format!("{}s", t.as_secs())),
    );
    output::field("Hero", &settings.hero.title);
    if settings.api.as_str().trim_end_matches('/') == DEFAULT_API {
        output::progress("Using the default API; run 'marquee config set-api' to change it.");
    }
    Ok(())
}

fn update(apply: impl FnOnce(&mut StoredConfig) -> Result<()>) -> Result<()> {
    let mut config = storage::load_config().context("Failed to load config")?;
    apply(&mut config)?;
    storage::save_config(&config).context("Failed to save config")?;
    output::success("Configuration saved");
    Ok(())
}
