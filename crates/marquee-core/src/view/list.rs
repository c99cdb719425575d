//! Movie list views: the landing-page preview and the full listing.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::list::{ListState, RemoteListController};
use crate::movie::MovieRecord;
use crate::traits::MovieCatalog;
use crate::types::MovieId;

use super::{CardStyle, MovieCardView};

/// Shown when the catalog returned an empty list.
pub const NO_MOVIES: &str = "No movies available at the moment.";

/// Which list is being shown and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListVariant {
    heading: &'static str,
    limit: Option<usize>,
    failure_message: &'static str,
    card_style: CardStyle,
}

impl ListVariant {
    /// Number of cards on the landing-page preview.
    pub const PREVIEW_LIMIT: usize = 4;

    /// The bounded preview on the landing page.
    pub fn latest_releases() -> Self {
        Self {
            heading: "Latest Releases",
            limit: Some(Self::PREVIEW_LIMIT),
            failure_message: "Unable to load latest releases. Please try again later.",
            card_style: CardStyle::Standard,
        }
    }

    /// The full movie listing.
    pub fn all_movies() -> Self {
        Self {
            heading: "All Movies",
            limit: None,
            failure_message: "Unable to load movies. Please try again later.",
            card_style: CardStyle::Standard,
        }
    }

    pub fn with_card_style(mut self, style: CardStyle) -> Self {
        self.card_style = style;
        self
    }

    pub fn heading(&self) -> &'static str {
        self.heading
    }

    /// Maximum number of cards shown, `None` for unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }

    pub fn card_style(&self) -> CardStyle {
        self.card_style
    }
}

/// What a list view currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Progress indicator.
    Loading,
    /// Error banner replacing the list.
    Error(String),
    /// The fetch succeeded with nothing to show.
    Empty(&'static str),
    /// Cards in catalog order.
    Cards(Vec<MovieCardView>),
}

impl Screen {
    /// Derive the screen for a list state.
    pub fn from_state(state: &ListState<MovieRecord>, variant: &ListVariant) -> Self {
        match state {
            ListState::Idle | ListState::Loading => Screen::Loading,
            ListState::Failure(message) => Screen::Error(message.clone()),
            ListState::Success(movies) if movies.is_empty() => Screen::Empty(NO_MOVIES),
            ListState::Success(movies) => {
                let limit = variant.limit().unwrap_or(movies.len());
                Screen::Cards(
                    movies
                        .iter()
                        .take(limit)
                        .cloned()
                        .map(|m| MovieCardView::new(m, variant.card_style()))
                        .collect(),
                )
            }
        }
    }

    /// The rendered cards; empty for every non-card screen.
    pub fn cards(&self) -> &[MovieCardView] {
        match self {
            Screen::Cards(cards) => cards,
            _ => &[],
        }
    }
}

/// A list of movie cards backed by a catalog.
pub struct MovieListView<C> {
    catalog: Arc<C>,
    variant: ListVariant,
    controller: RemoteListController<MovieRecord>,
}

impl<C> MovieListView<C>
where
    C: MovieCatalog + 'static,
{
    pub fn new(catalog: Arc<C>, variant: ListVariant) -> Self {
        let controller = RemoteListController::new(variant.failure_message());
        Self {
            catalog,
            variant,
            controller,
        }
    }

    pub fn variant(&self) -> &ListVariant {
        &self.variant
    }

    /// First display: fetch the collection in the background.
    #[instrument(skip(self), fields(heading = self.variant.heading, api = %self.catalog.url()))]
    pub fn mount(&self) -> JoinHandle<()> {
        debug!("Mounting movie list");
        let catalog = Arc::clone(&self.catalog);
        self.controller
            .start(move || async move { catalog.all_movies().await })
    }

    /// Fetch the collection on the current task and return the result screen.
    #[instrument(skip(self), fields(heading = self.variant.heading, api = %self.catalog.url()))]
    pub async fn load(&self) -> Screen {
        debug!("Loading movie list");
        self.controller.load(|| self.catalog.all_movies()).await;
        self.screen()
    }

    /// Teardown: no result arriving after this changes the view.
    pub fn unmount(&self) {
        self.controller.cancel();
    }

    pub fn state(&self) -> ListState<MovieRecord> {
        self.controller.current_state()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState<MovieRecord>> {
        self.controller.subscribe()
    }

    pub fn screen(&self) -> Screen {
        Screen::from_state(&self.controller.current_state(), &self.variant)
    }

    /// Find the card for a movie anywhere in the loaded list, including
    /// movies past the preview limit.
    pub fn card(&self, id: &MovieId) -> Option<MovieCardView> {
        self.controller
            .current_state()
            .items()?
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .map(|m| MovieCardView::new(m, self.variant.card_style()))
    }
}

impl<C> std::fmt::Debug for MovieListView<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovieListView")
            .field("variant", &self.variant)
            .field("controller", &self.controller)
            .finish()
    }
}
