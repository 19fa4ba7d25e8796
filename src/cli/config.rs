//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::Label;

/// Settings from `config.toml`. Every key is optional and command-line
/// flags win over the file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub dir: Option<PathBuf>,
    pub label: Option<Label>,
    /// Command line for the external editor, e.g. `code --wait`
    pub editor: Option<String>,
}

impl Config {
    /// Reads [`Config::config_path`]; a missing file means all defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// `<config dir>/daybook/config.toml`, e.g. `~/.config/daybook/config.toml`.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daybook")
            .join("config.toml")
    }

    /// Notes directory: `--dir`, then `dir` from the file, then the
    /// working directory.
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .or(self.dir.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Label for generated names: `--label`, then `label` from the file,
    /// then [`DEFAULT_LABEL`](crate::domain::DEFAULT_LABEL).
    pub fn label(&self, cli_label: Option<&Label>) -> Label {
        cli_label.or(self.label.as_ref()).cloned().unwrap_or_default()
    }

    /// External editor command; `$EDITOR` and `$VISUAL` back up the file
    /// setting, and `vi` is the last resort.
    pub fn editor(&self) -> String {
        self.editor
            .clone()
            .or_else(|| ["EDITOR", "VISUAL"].iter().find_map(|v| std::env::var(v).ok()))
            .unwrap_or_else(|| "vi".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.notes_dir(None), PathBuf::from("."));
        assert_eq!(config.label(None).as_str(), "我的日记");
    }

    #[test]
    fn cli_overrides_file() {
        let config = Config::parse("dir = \"/diary\"\nlabel = \"journal\"\n").unwrap();
        let dir = PathBuf::from("/elsewhere");
        let label = Label::new("travel").unwrap();

        assert_eq!(config.notes_dir(None), PathBuf::from("/diary"));
        assert_eq!(config.label(None).as_str(), "journal");
        assert_eq!(config.notes_dir(Some(&dir)), dir);
        assert_eq!(config.label(Some(&label)), label);
    }

    #[test]
    fn file_editor_is_used_verbatim() {
        let config = Config::parse("editor = \"code --wait\"").unwrap();
        assert_eq!(config.editor(), "code --wait");
    }

    #[test]
    fn invalid_label_in_file_is_rejected() {
        assert!(Config::parse("label = \"a/b\"").is_err());
        assert!(Config::parse("label = \"  \"").is_err());
    }

    #[test]
    fn unknown_value_types_are_rejected() {
        assert!(Config::parse("dir = 3").is_err());
    }
}
