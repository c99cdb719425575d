#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use url::Url;

/// An isolated HOME with a catalog file next to it.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("home")).unwrap();
        Self { dir }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    /// Write a catalog file and return its file:// URL.
    pub fn catalog(&self, json: &str) -> String {
        let path = self.dir.path().join("movies.json");
        std::fs::write(&path, json).expect("Failed to write catalog");
        file_url(&path)
    }

    /// URL of a catalog file that does not exist.
    pub fn missing_catalog(&self) -> String {
        file_url(&self.dir.path().join("absent.json"))
    }

    /// Run the CLI with isolated config storage.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_marquee"));
        cmd.args(args);
        cmd.env("HOME", self.home());
        cmd.env("XDG_CONFIG_HOME", self.home().join("config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("MARQUEE_API");
        cmd.env_remove("RUST_LOG");
        cmd.output().expect("Failed to execute CLI")
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

pub fn file_url(path: &Path) -> String {
    Url::from_file_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

/// Six movies in catalog order.
pub const SIX_MOVIES: &str = r#"{"movies":[
    {"_id":"m1","title":"Alpha","releaseDate":"2024-05-01","posterUrl":"https://img/alpha.jpg"},
    {"_id":"m2","title":"Bravo","releaseDate":"2024-06-15T00:00:00.000Z"},
    {"_id":"m3","title":"Charlie","releaseDate":"2023-12-25","description":"Festive."},
    {"_id":"m4","title":"Delta"},
    {"_id":"m5","title":"Echo","releaseDate":"2022-01-09"},
    {"_id":"m6","title":"Foxtrot","releaseDate":"2021-07-04"}
]}"#;
