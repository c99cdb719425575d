//! Catalog selection for the CLI.

use anyhow::{Context, Result};
use async_trait::async_trait;

use marquee_core::traits::MovieCatalog;
use marquee_core::{ApiUrl, MovieRecord};
use marquee_file::FileCatalog;
use marquee_http::HttpCatalog;

use crate::config::Settings;

/// The catalog behind the CLI: a local file or the movie API.
#[derive(Debug)]
pub enum CliCatalog {
    File(FileCatalog),
    Http(HttpCatalog),
}

impl CliCatalog {
    /// Open the catalog named by the settings.
    pub fn open(settings: &Settings) -> Result<Self> {
        if settings.api.is_local() {
            let catalog =
                FileCatalog::new(settings.api.clone()).context("Failed to open catalog file")?;
            Ok(CliCatalog::File(catalog))
        } else {
            let catalog = HttpCatalog::with_options(
                settings.api.clone(),
                settings.movies_path.clone(),
                settings.timeout,
            )
            .context("Failed to create HTTP client")?;
            Ok(CliCatalog::Http(catalog))
        }
    }
}

#[async_trait]
impl MovieCatalog for CliCatalog {
    fn url(&self) -> &ApiUrl {
        match self {
            CliCatalog::File(catalog) => catalog.url(),
            CliCatalog::Http(catalog) => catalog.url(),
        }
    }

    async fn all_movies(&self) -> marquee_core::Result<Vec<MovieRecord>> {
        match self {
            CliCatalog::File(catalog) => catalog.all_movies().await,
            CliCatalog::Http(catalog) => catalog.all_movies().await,
        }
    }
}
