//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use url::Url;

use marquee_core::{HomeScreen, MovieCardView, Poster, Screen};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a dimmed progress note on stderr.
pub fn progress(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a section heading.
pub fn heading(text: &str) {
    println!("{}", text.bold().underline());
    println!();
}

/// Print a list screen.
pub fn screen(screen: &Screen, site: Option<&Url>) {
    match screen {
        Screen::Loading => progress("Loading..."),
        Screen::Error(message) => println!("{} {}", "✗".red(), message.red()),
        Screen::Empty(message) => println!("{}", message.dimmed()),
        Screen::Cards(cards) => {
            for (i, c) in cards.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                card(c, site);
            }
        }
    }
}

/// Print one movie card.
pub fn card(card: &MovieCardView, site: Option<&Url>) {
    println!("{} {}", "▸".cyan(), card.title().bold());
    println!("  {} {}", "Released".dimmed(), card.release_label());

    match card.poster() {
        Poster::Image(url) => println!("  {} {}", "Poster".dimmed(), url),
        Poster::Placeholder => println!("  {} {}", "Poster".dimmed(), "[no poster]".dimmed()),
    }

    if let Some(description) = card.description() {
        println!("  {}", description.italic());
    }

    let route = card.booking_route();
    let target = match site {
        Some(site) => route.url_on(site),
        None => route.path(),
    };
    println!("  {} → {}", card.action_label().green(), target);
}

/// Print the landing page.
pub fn home(home: &HomeScreen, site: Option<&Url>) {
    println!("{}", home.hero.title.bold());
    println!("{}", home.hero.tagline.italic());
    println!("  {} {}", "Poster".dimmed(), home.hero.image_url);
    println!();

    heading(home.heading);
    screen(&home.releases, site);
    println!();

    let (label, route) = &home.view_all;
    let target = match site {
        Some(site) => route.url_on(site),
        None => route.path(),
    };
    println!("{} → {}", label.bold(), target);
}
