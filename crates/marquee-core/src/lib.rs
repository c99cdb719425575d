//! marquee-core - Core movie browser types, traits and view models.

pub mod error;
pub mod list;
pub mod movie;
pub mod traits;
pub mod types;
pub mod view;

pub use error::Error;
pub use list::{ListState, RemoteListController};
pub use movie::{MovieRecord, decode_movie_list};
pub use traits::{MovieCatalog, Navigator};
pub use types::{ApiUrl, MovieId, Route};
pub use view::{
    CardStyle, Hero, HomePage, HomeScreen, ListVariant, MovieCardView, MovieListView, Poster,
    Screen,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
