//! CLI integration tests against a catalog file.

mod common;

use common::{SIX_MOVIES, Sandbox};

#[test]
fn test_movies_lists_everything_in_order() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    let stdout = sandbox.run_success(&["--api", &api, "movies"]);

    assert!(stdout.contains("All Movies"));
    let titles = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"];
    let positions: Vec<_> = titles
        .iter()
        .map(|t| stdout.find(t).unwrap_or_else(|| panic!("{} missing", t)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(stdout.contains("May 1, 2024"));
    assert!(stdout.contains("December 25, 2023"));
    assert!(stdout.contains("Release date TBA"));
    assert!(stdout.contains("[no poster]"));
    assert!(stdout.contains("Book Tickets → /booking/m1"));
}

#[test]
fn test_movies_compact_cards() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    let stdout = sandbox.run_success(&["--api", &api, "movies", "--compact"]);

    assert!(stdout.contains("Dec 25, 2023"));
    assert!(stdout.contains("Book Now → /booking/m3"));
}

#[test]
fn test_movies_json() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    let stdout = sandbox.run_success(&["--api", &api, "movies", "--json"]);

    let movies: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 6);
    assert_eq!(movies[0]["_id"], "m1");
    assert_eq!(movies[1]["releaseDate"], "2024-06-15");
}

#[test]
fn test_home_previews_four() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    let stdout = sandbox.run_success(&["--api", &api, "home"]);

    assert!(stdout.contains("Deadpool 3"));
    assert!(stdout.contains("Coming Soon to Theaters"));
    assert!(stdout.contains("Latest Releases"));
    for shown in ["Alpha", "Bravo", "Charlie", "Delta"] {
        assert!(stdout.contains(shown), "{} missing", shown);
    }
    for hidden in ["Echo", "Foxtrot"] {
        assert!(!stdout.contains(hidden), "{} shown", hidden);
    }
    assert!(stdout.contains("View All Movies → /movies"));
}

#[test]
fn test_empty_catalog_message() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(r#"{"movies":[]}"#);

    let stdout = sandbox.run_success(&["--api", &api, "movies"]);

    assert!(stdout.contains("No movies available at the moment."));
    assert!(!stdout.contains("Please try again later"));
}

#[test]
fn test_unreadable_catalog_shows_banner() {
    let sandbox = Sandbox::new();
    let api = sandbox.missing_catalog();

    let stdout = sandbox.run_success(&["--api", &api, "movies"]);
    assert!(stdout.contains("Unable to load movies. Please try again later."));
    assert!(!stdout.contains("/booking/"));

    let stdout = sandbox.run_success(&["--api", &api, "home"]);
    assert!(stdout.contains("Unable to load latest releases. Please try again later."));
}

#[test]
fn test_book_known_movie() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    // m6 is past the landing-page preview and still bookable.
    let stdout = sandbox.run_success(&["--api", &api, "book", "m6"]);

    assert!(stdout.contains("Booking Foxtrot"));
    assert!(stdout.contains("Route: /booking/m6"));
    assert!(!stdout.contains("Link:"));
}

#[test]
fn test_book_unknown_movie_fails() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    let output = sandbox.run(&["--api", &api, "book", "nope"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No movie with id 'nope'"));
}

#[test]
fn test_book_when_catalog_unavailable_fails() {
    let sandbox = Sandbox::new();
    let api = sandbox.missing_catalog();

    let output = sandbox.run(&["--api", &api, "book", "m1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unable to load movies"));
}

#[test]
fn test_config_set_api_and_site() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(SIX_MOVIES);

    sandbox.run_success(&["config", "set-api", &api]);
    sandbox.run_success(&["config", "set-site", "https://tickets.example.com"]);

    let stdout = sandbox.run_success(&["config", "show"]);
    assert!(stdout.contains(&api));
    assert!(stdout.contains("https://tickets.example.com"));

    // No --api: the stored catalog is used.
    let stdout = sandbox.run_success(&["book", "m1"]);
    assert!(stdout.contains("Link: https://tickets.example.com/booking/m1"));

    sandbox.run_success(&["config", "reset"]);
    let stdout = sandbox.run_success(&["config", "show"]);
    assert!(stdout.contains("http://localhost:5000"));
}

#[test]
fn test_config_rejects_invalid_api() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["config", "set-api", "ftp://example.com"]);

    assert!(!output.status.success());
}

#[test]
fn test_hero_override_from_config() {
    let sandbox = Sandbox::new();
    let api = sandbox.catalog(r#"[]"#);
    let config_dir = sandbox.home().join("config").join("marquee");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{"hero":{"title":"Dune: Part Two","tagline":"Now Showing","imageUrl":"https://img/dune.jpg"}}"#,
    )
    .unwrap();

    let stdout = sandbox.run_success(&["--api", &api, "home"]);

    assert!(stdout.contains("Dune: Part Two"));
    assert!(!stdout.contains("Deadpool 3"));
}
