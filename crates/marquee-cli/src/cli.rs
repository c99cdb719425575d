//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::book::BookArgs;
use crate::commands::home::HomeArgs;
use crate::commands::movies::MoviesArgs;
use crate::commands::settings::ConfigCommand;

/// Browse movies and find booking links.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(author, version = env!("MARQUEE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Movie API base URL, or file:// URL of a catalog file
    #[arg(long, global = true, env = "MARQUEE_API")]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the landing page: featured movie and latest releases
    Home(HomeArgs),

    /// List all movies
    Movies(MoviesArgs),

    /// Open the booking flow for a movie
    Book(BookArgs),

    /// Show or change the stored configuration
    Config(ConfigCommand),
}
