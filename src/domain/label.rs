//! Descriptive label embedded in generated note names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The label used when neither the command line nor the config names one.
pub const DEFAULT_LABEL: &str = "我的日记";

/// The descriptive part of a generated note name.
///
/// In `2025-06-01_我的日记_1.txt` the label is `我的日记`. Labels are not
/// restricted to ASCII, but they must be usable inside a single file name.
///
/// # Validation Rules
/// - Non-empty after trimming surrounding whitespace
/// - No path separators (`/`, `\`) and no control characters
/// - Not `.` or `..`
///
/// # Examples
///
/// ```
/// use daybook::domain::Label;
///
/// let label = Label::new("  my diary ").unwrap();
/// assert_eq!(label.as_str(), "my diary");
///
/// assert!(Label::new("a/b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

/// Error returned when parsing an invalid label.
#[derive(Debug, Clone)]
pub struct ParseLabelError(String);

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseLabelError {}

impl Label {
    /// Creates a new Label, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseLabelError` if the label is empty, is `.` or `..`, or
    /// contains a path separator or control character.
    pub fn new(s: &str) -> Result<Self, ParseLabelError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseLabelError("label cannot be empty".to_string()));
        }

        if trimmed == "." || trimmed == ".." {
            return Err(ParseLabelError(format!(
                "invalid label '{}': reserved file name",
                trimmed
            )));
        }

        if let Some(c) = trimmed
            .chars()
            .find(|c| *c == '/' || *c == '\\' || c.is_control())
        {
            return Err(ParseLabelError(format!(
                "invalid label '{}': character {:?} is not allowed in a file name",
                trimmed, c
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Label {
    fn default() -> Self {
        Self(DEFAULT_LABEL.to_string())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label(\"{}\")", self.0)
    }
}

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
