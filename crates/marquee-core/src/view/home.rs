//! The landing page.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::traits::{MovieCatalog, Navigator};
use crate::types::Route;

use super::{ListVariant, MovieListView, Screen};

/// Label of the link from the landing page to the full listing.
pub const VIEW_ALL_LABEL: &str = "View All Movies";

/// The featured banner at the top of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub tagline: String,
    pub image_url: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Deadpool 3".to_string(),
            tagline: "Coming Soon to Theaters".to_string(),
            image_url: "https://static0.gamerantimages.com/wordpress/wp-content/uploads/2024/02/new-deadpool-3-poster-from-marvel-studios-accused-of-using-ai.jpg".to_string(),
        }
    }
}

/// Everything the landing page shows at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeScreen {
    pub hero: Hero,
    pub heading: &'static str,
    pub releases: Screen,
    pub view_all: (&'static str, Route),
}

/// Hero banner, a preview of the latest releases, and a link onward.
#[derive(Debug)]
pub struct HomePage<C> {
    hero: Hero,
    latest: MovieListView<C>,
}

impl<C> HomePage<C>
where
    C: MovieCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, hero: Hero) -> Self {
        Self {
            hero,
            latest: MovieListView::new(catalog, ListVariant::latest_releases()),
        }
    }

    pub fn mount(&self) -> JoinHandle<()> {
        self.latest.mount()
    }

    pub async fn load(&self) -> HomeScreen {
        self.latest.load().await;
        self.screen()
    }

    pub fn unmount(&self) {
        self.latest.unmount();
    }

    pub fn screen(&self) -> HomeScreen {
        HomeScreen {
            hero: self.hero.clone(),
            heading: self.latest.variant().heading(),
            releases: self.latest.screen(),
            view_all: (VIEW_ALL_LABEL, Route::Movies),
        }
    }

    /// Follow the "View All Movies" link.
    pub fn view_all(&self, navigator: &impl Navigator) -> Route {
        let route = Route::Movies;
        navigator.navigate(&route);
        route
    }
}
