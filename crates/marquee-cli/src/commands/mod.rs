//! Subcommand implementations.

pub mod book;
pub mod home;
pub mod movies;
pub mod settings;
