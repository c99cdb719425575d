//! Booking navigation command.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Args;

use marquee_core::{ListVariant, MovieId, MovieListView, Screen};

use crate::catalog::CliCatalog;
use crate::config::Settings;
use crate::navigator::TerminalNavigator;
use crate::output;

#[derive(Args, Debug)]
pub struct BookArgs {
    /// Movie identifier
    pub id: String,
}

pub async fn run(args: BookArgs, api: Option<&str>) -> Result<()> {
    let id = MovieId::new(&args.id).context("Invalid movie id")?;
    let settings = Settings::resolve(api)?;
    let catalog = Arc::new(CliCatalog::open(&settings)?);
    let view = MovieListView::new(catalog, ListVariant::all_movies());

    if let Screen::Error(message) = view.load().await {
        bail!(message);
    }

    let card = view
        .card(&id)
        .with_context(|| format!("No movie with id '{}'", id))?;

    output::success(&format!("Booking {}", card.title()));
    output::field("Released", &card.release_label());
    card.activate(&TerminalNavigator::new(settings.site.clone()));

    Ok(())
}
