//! Landing page command.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use marquee_core::HomePage;

use crate::catalog::CliCatalog;
use crate::config::Settings;
use crate::output;

#[derive(Args, Debug)]
pub struct HomeArgs {}

pub async fn run(_args: HomeArgs, api: Option<&str>) -> Result<()> {
    let settings = Settings::resolve(api)?;
    let catalog = Arc::new(CliCatalog::open(&settings)?);
    let home = HomePage::new(catalog, settings.hero.clone());

    output::progress("Loading latest releases...");
    let screen = home.load().await;

    output::home(&screen, settings.site.as_ref());
    Ok(())
}
