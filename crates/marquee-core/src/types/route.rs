//! Navigation routes.

use std::fmt;

use super::MovieId;

/// A navigation target inside the movie browser.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The landing page.
    Home,
    /// The full movie listing.
    Movies,
    /// The booking flow for one movie.
    Booking(MovieId),
}

impl Route {
    /// Returns the path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Movies => "/movies".to_string(),
            Route::Booking(id) => format!("/booking/{}", id),
        }
    }

    /// Join this route onto a site base URL.
    pub fn url_on(&self, site: &url::Url) -> String {
        let base = site.as_str().trim_end_matches('/');
        format!("{}{}", base, self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
