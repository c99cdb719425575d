//! Movie catalog read from a JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use marquee_core::error::{Error, InvalidInputError, TransportError};
use marquee_core::traits::MovieCatalog;
use marquee_core::{ApiUrl, MovieRecord, Result, decode_movie_list};

fn map_io(path: &Path, err: std::io::Error) -> Error {
    Error::Transport(TransportError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// A movie catalog stored on disk.
///
/// The file holds the same JSON the movie API serves: either
/// `{"movies": [...]}` or a bare array. It is re-read on every fetch, so
/// edits show up on the next load.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    url: ApiUrl,
}

impl FileCatalog {
    /// Create a catalog for a `file://` URL.
    pub fn new(url: ApiUrl) -> Result<Self> {
        let path = url.to_file_path().ok_or_else(|| InvalidInputError::ApiUrl {
            value: url.to_string(),
            reason: "not a file:// URL".to_string(),
        })?;
        Ok(Self { path, url })
    }

    /// Returns the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MovieCatalog for FileCatalog {
    fn url(&self) -> &ApiUrl {
        &self.url
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn all_movies(&self) -> Result<Vec<MovieRecord>> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| map_io(&self.path, e))?;
        let movies = decode_movie_list(&body)?;
        debug!(count = movies.len(), "Read movies from file");
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog_at(path: &Path) -> FileCatalog {
        let url = url_for(path);
        FileCatalog::new(ApiUrl::new(url).unwrap()).unwrap()
    }

    fn url_for(path: &Path) -> String {
        format!("file://{}", path.display())
    }

    #[tokio::test]
    async fn reads_envelope_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(
            &path,
            r#"{"movies":[{"_id":"a","title":"X","releaseDate":"2024-05-01","posterUrl":"u1"}]}"#,
        )
        .unwrap();

        let movies = catalog_at(&path).all_movies().await.unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "X");
    }

    #[tokio::test]
    async fn rereads_on_every_fetch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, "[]").unwrap();
        let catalog = catalog_at(&path);

        assert!(catalog.all_movies().await.unwrap().is_empty());

        std::fs::write(&path, r#"[{"_id":"a"},{"_id":"b"}]"#).unwrap();
        assert_eq!(catalog.all_movies().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_transport_error() {
        let dir = TempDir::new().unwrap();
        let catalog = catalog_at(&dir.path().join("absent.json"));

        let err = catalog.all_movies().await.unwrap_err();

        assert!(matches!(err, Error::Transport(TransportError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.json");
        std::fs::write(&path, "not json").unwrap();

        let err = catalog_at(&path).all_movies().await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn rejects_network_url() {
        let api = ApiUrl::new("http://localhost:5000").unwrap();
        assert!(FileCatalog::new(api).is_err());
    }
}
