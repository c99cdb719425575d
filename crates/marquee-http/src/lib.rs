//! marquee-http - HTTP-backed movie catalog.

mod catalog;
mod client;

pub use catalog::{DEFAULT_MOVIES_PATH, HttpCatalog};
pub use client::ApiClient;
