//! View models for the movie browser.
//!
//! Views describe what is on screen as plain data. Rendering that data is
//! left to the front end (the CLI prints it to a terminal).

mod card;
mod home;
mod list;

pub use card::{CardStyle, MovieCardView, Poster};
pub use home::{Hero, HomePage, HomeScreen};
pub use list::{ListVariant, MovieListView, NO_MOVIES, Screen};

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::error::{Error, TransportError};
    use crate::movie::MovieRecord;
    use crate::traits::{MovieCatalog, Navigator};
    use crate::types::{ApiUrl, MovieId, Route};

    pub fn movie(id: &str, title: &str) -> MovieRecord {
        MovieRecord::new(MovieId::new(id).unwrap(), title)
    }

    pub fn dated(id: &str, title: &str, y: i32, m: u32, d: u32) -> MovieRecord {
        movie(id, title).with_release_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    /// Catalog answering with a fixed list, or failing.
    pub struct StubCatalog {
        url: ApiUrl,
        movies: Option<Vec<MovieRecord>>,
    }

    impl StubCatalog {
        pub fn with(movies: Vec<MovieRecord>) -> Self {
            Self {
                url: ApiUrl::new("http://localhost:5000").unwrap(),
                movies: Some(movies),
            }
        }

        pub fn failing() -> Self {
            Self {
                url: ApiUrl::new("http://localhost:5000").unwrap(),
                movies: None,
            }
        }
    }

    #[async_trait]
    impl MovieCatalog for StubCatalog {
        fn url(&self) -> &ApiUrl {
            &self.url
        }

        async fn all_movies(&self) -> crate::Result<Vec<MovieRecord>> {
            self.movies.clone().ok_or_else(|| {
                Error::Transport(TransportError::Connection {
                    message: "connection refused".to_string(),
                })
            })
        }
    }

    /// Navigator remembering every route it was asked for.
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub visited: Mutex<Vec<Route>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: &Route) {
            self.visited.lock().unwrap().push(route.clone());
        }
    }
}
