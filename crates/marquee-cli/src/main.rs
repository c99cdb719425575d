//! marquee - terminal movie browser.
//!
//! A thin front end over `marquee-core`: it renders the landing page, the
//! full movie listing and booking links from a movie API or a local
//! catalog file.

mod catalog;
mod cli;
mod commands;
mod config;
mod navigator;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{book, home, movies, settings};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let api = cli.api.as_deref();
    match cli.command {
        Commands::Home(args) => home::run(args, api).await,
        Commands::Movies(args) => movies::run(args, api).await,
        Commands::Book(args) => book::run(args, api).await,
        Commands::Config(cmd) => settings::handle(cmd),
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
