//! Isolated test environment with temp directory.

// Not every test crate uses every helper
#![allow(dead_code)]

use super::DaybookCommand;
use chrono::Local;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// The notes directory and a private home directory live under one temp
/// directory that is removed on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir(&notes_dir).expect("Failed to create notes directory");
        std::fs::create_dir(&home_dir).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            home_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the private home directory.
    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Writes a file into the notes directory and returns its path.
    pub fn add_note(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write test note");
        path
    }

    /// Reads a file from the notes directory.
    pub fn read_note(&self, name: &str) -> String {
        std::fs::read_to_string(self.notes_dir.join(name)).expect("Failed to read note")
    }

    /// Writes a config file into the private home directory.
    pub fn write_config(&self, contents: &str) {
        let config_dir = self.home_dir.join(".config").join("daybook");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config directory");
        std::fs::write(config_dir.join("config.toml"), contents).expect("Failed to write config");
    }

    /// The name a first note created today with `label` receives.
    pub fn today_name(&self, label: &str) -> String {
        format!("{}_{}.txt", Local::now().format("%Y-%m-%d"), label)
    }

    /// Creates a DaybookCommand configured for this test environment.
    pub fn cmd(&self) -> DaybookCommand {
        DaybookCommand::new()
            .home(&self.home_dir)
            .dir(&self.notes_dir)
    }

    /// Creates a DaybookCommand that relies on the config file for the notes directory.
    pub fn cmd_without_dir(&self) -> DaybookCommand {
        DaybookCommand::new().home(&self.home_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
