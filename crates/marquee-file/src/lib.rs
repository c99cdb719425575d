//! marquee-file - Filesystem-backed movie catalog.

mod catalog;

pub use catalog::FileCatalog;
