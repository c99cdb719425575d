//! Core marquee types.
//!
//! These types enforce their invariants at construction time, so an empty
//! movie id or a relative API URL cannot reach the catalogs.

mod api_url;
mod movie_id;
mod route;

pub use api_url::ApiUrl;
pub use movie_id::MovieId;
pub use route::Route;
