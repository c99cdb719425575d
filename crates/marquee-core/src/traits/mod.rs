//! Collaborator traits for fetching movies and navigating.

mod catalog;
mod navigator;

pub use catalog::MovieCatalog;
pub use navigator::Navigator;
