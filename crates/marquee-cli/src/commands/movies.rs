//! Full movie listing command.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use marquee_core::{CardStyle, ListState, ListVariant, MovieListView};

use crate::catalog::CliCatalog;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct MoviesArgs {
    /// Use compact cards (short month names)
    #[arg(long)]
    pub compact: bool,

    /// Print the movie records as JSON instead of cards
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: MoviesArgs, api: Option<&str>) -> Result<()> {
    let settings = Settings::resolve(api)?;
    let catalog = Arc::new(CliCatalog::open(&settings)?);

    let style = if args.compact {
        CardStyle::Compact
    } else {
        CardStyle::Standard
    };
    let view = MovieListView::new(catalog, ListVariant::all_movies().with_card_style(style));

    let mut updates = view.subscribe();
    let _fetch = view.mount();

    if view.state().is_loading() {
        output::progress("Loading movies...");
    }

    tokio::select! {
        settled = updates.wait_for(ListState::is_settled) => {
            settled.map(|_| ()).context("Movie list closed before loading finished")?;
        }
        _ = tokio::signal::ctrl_c() => {
            view.unmount();
            output::error("Cancelled");
            return Ok(());
        }
    }

    if args.json {
        if let ListState::Success(movies) = view.state() {
            return output::json_pretty(&movies);
        }
    }

    output::heading(view.variant().heading());
    output::screen(&view.screen(), settings.site.as_ref());
    Ok(())
}
