//! Movie catalog trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::movie::MovieRecord;
use crate::types::ApiUrl;

/// A source of movie records.
///
/// The only operation is "get all movies": no pagination, filtering or
/// sort parameters. Implementations return records in the order the
/// source provides them.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Returns the URL this catalog reads from.
    fn url(&self) -> &ApiUrl;

    /// Fetch the full movie collection.
    async fn all_movies(&self) -> Result<Vec<MovieRecord>>;
}

#[async_trait]
impl<C: MovieCatalog + ?Sized> MovieCatalog for Arc<C> {
    fn url(&self) -> &ApiUrl {
        (**self).url()
    }

    async fn all_movies(&self) -> Result<Vec<MovieRecord>> {
        (**self).all_movies().await
    }
}
