//! HTTP-backed movie catalog.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use marquee_core::traits::MovieCatalog;
use marquee_core::{ApiUrl, MovieRecord, Result, decode_movie_list};

use crate::client::ApiClient;

/// Path of the "get all movies" endpoint.
pub const DEFAULT_MOVIES_PATH: &str = "/movie";

/// A movie catalog served by a remote movie API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: ApiClient,
    movies_path: String,
}

impl HttpCatalog {
    /// Create a catalog for the given API with default settings.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_options(api, DEFAULT_MOVIES_PATH, None)
    }

    /// Create a catalog with a custom movies path and request timeout.
    pub fn with_options(
        api: ApiUrl,
        movies_path: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(api, timeout)?,
            movies_path: movies_path.into(),
        })
    }

    pub fn movies_path(&self) -> &str {
        &self.movies_path
    }
}

#[async_trait]
impl MovieCatalog for HttpCatalog {
    fn url(&self) -> &ApiUrl {
        self.client.api()
    }

    #[instrument(skip(self), fields(path = %self.movies_path))]
    async fn all_movies(&self) -> Result<Vec<MovieRecord>> {
        let body = self.client.get_bytes(&self.movies_path).await?;
        let movies = decode_movie_list(&body)?;
        debug!(count = movies.len(), "Fetched movies");
        Ok(movies)
    }
}
