//! Note file names and the date-stamped naming scheme.

use chrono::NaiveDate;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::domain::Label;

/// File extension carried by every note.
pub const NOTE_EXTENSION: &str = "txt";

/// Date format used in generated names (`2025-06-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static DATED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})_(.+?)(?:_(\d+))?\.txt$").expect("dated name pattern is valid")
});

/// A flat file name inside the storage directory.
///
/// Any single path component is accepted, so files saved under a custom
/// name still round-trip; use [`NoteName::is_note`] to check for the `.txt`
/// extension.
///
/// # Examples
///
/// ```
/// use daybook::domain::NoteName;
///
/// let name: NoteName = "2025-01-01_x.txt".parse().unwrap();
/// assert!(name.is_note());
/// assert!("../escape.txt".parse::<NoteName>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteName(String);

/// Error returned when a string is not a usable note file name.
#[derive(Debug, Clone)]
pub struct ParseNoteNameError(String);

impl fmt::Display for ParseNoteNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNoteNameError {}

impl NoteName {
    /// Creates a NoteName from a single file name component.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteNameError` if the name is empty, is `.` or `..`,
    /// or contains a path separator or NUL byte.
    pub fn new(s: &str) -> Result<Self, ParseNoteNameError> {
        if s.is_empty() {
            return Err(ParseNoteNameError("note name cannot be empty".to_string()));
        }
        if s == "." || s == ".." {
            return Err(ParseNoteNameError(format!(
                "invalid note name '{}': reserved file name",
                s
            )));
        }
        if s.contains(['/', '\\', '\0']) {
            return Err(ParseNoteNameError(format!(
                "invalid note name '{}': must be a plain file name without directories",
                s
            )));
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name carries the note extension.
    pub fn is_note(&self) -> bool {
        has_note_extension(&self.0)
    }

    /// Parses the name as a generated `<date>_<label>(_<seq>)?.txt` name.
    ///
    /// Returns `None` for names that do not follow the pattern.
    pub fn dated(&self) -> Option<DatedName> {
        DatedName::parse(&self.0)
    }
}

/// Returns true if `name` ends in `.txt`.
fn has_note_extension(name: &str) -> bool {
    name.strip_suffix(NOTE_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteName(\"{}\")", self.0)
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// The structured form of a generated note name.
///
/// Renders as `YYYY-MM-DD_<label>.txt` without a sequence number and
/// `YYYY-MM-DD_<label>_<seq>.txt` with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedName {
    pub date: NaiveDate,
    pub label: Label,
    pub seq: Option<u32>,
}

impl DatedName {
    /// The first candidate for a date: no sequence number.
    pub fn base(date: NaiveDate, label: &Label) -> Self {
        Self {
            date,
            label: label.clone(),
            seq: None,
        }
    }

    /// The same date and label with sequence number `seq`.
    pub fn with_seq(&self, seq: u32) -> Self {
        Self {
            seq: Some(seq),
            ..self.clone()
        }
    }

    /// Parses a generated name.
    ///
    /// Trailing `_<digits>` before the extension is always read as the
    /// sequence number, so a label that itself ends in `_<digits>` comes
    /// back split.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = DATED_NAME_RE.captures(s)?;
        let date = NaiveDate::parse_from_str(&caps[1], DATE_FORMAT).ok()?;
        let label = Label::new(&caps[2]).ok()?;
        // Guard against whitespace-padded labels that Label::new would trim
        if label.as_str() != &caps[2] {
            return None;
        }
        let seq = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().ok()?),
            None => None,
        };
        Some(Self { date, label, seq })
    }

    pub fn to_note_name(&self) -> NoteName {
        // Dates and validated labels never produce separators
        NoteName(self.to_string())
    }
}

impl fmt::Display for DatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.date.format(DATE_FORMAT);
        match self.seq {
            Some(n) => write!(f, "{}_{}_{}.{}", date, self.label, n, NOTE_EXTENSION),
            None => write!(f, "{}_{}.{}", date, self.label, NOTE_EXTENSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ===========================================
    // NoteName validation
    // ===========================================

    #[test]
    fn note_name_accepts_plain_file_names() {
        assert_eq!(NoteName::new("a.txt").unwrap().as_str(), "a.txt");
        assert_eq!(NoteName::new("notes.md").unwrap().as_str(), "notes.md");
        assert_eq!(
            NoteName::new("2025-06-01_我的日记.txt").unwrap().as_str(),
            "2025-06-01_我的日记.txt"
        );
    }

    #[test]
    fn note_name_rejects_directories() {
        assert!(NoteName::new("sub/a.txt").is_err());
        assert!(NoteName::new("..\\a.txt").is_err());
        assert!(NoteName::new("..").is_err());
        assert!(NoteName::new("").is_err());
    }

    #[test]
    fn is_note_checks_extension() {
        assert!(NoteName::new("x.txt").unwrap().is_note());
        assert!(!NoteName::new("notes.md").unwrap().is_note());
        assert!(!NoteName::new("txt").unwrap().is_note());
        assert!(!NoteName::new("footxt").unwrap().is_note());
    }

    // ===========================================
    // DatedName rendering
    // ===========================================

    #[test]
    fn base_renders_without_sequence() {
        let label = Label::new("我的日记").unwrap();
        let name = DatedName::base(date(2025, 6, 1), &label);
        assert_eq!(name.to_string(), "2025-06-01_我的日记.txt");
    }

    #[test]
    fn with_seq_appends_underscore_number() {
        let label = Label::new("x").unwrap();
        let name = DatedName::base(date(2025, 1, 9), &label).with_seq(3);
        assert_eq!(name.to_string(), "2025-01-09_x_3.txt");
    }

    #[test]
    fn date_is_zero_padded() {
        let label = Label::new("x").unwrap();
        let name = DatedName::base(date(987, 2, 3), &label);
        assert_eq!(name.to_string(), "0987-02-03_x.txt");
    }

    // ===========================================
    // DatedName parsing
    // ===========================================

    #[test]
    fn parse_base_name() {
        let parsed = DatedName::parse("2025-06-01_我的日记.txt").unwrap();
        assert_eq!(parsed.date, date(2025, 6, 1));
        assert_eq!(parsed.label.as_str(), "我的日记");
        assert_eq!(parsed.seq, None);
    }

    #[test]
    fn parse_sequenced_name() {
        let parsed = DatedName::parse("2025-06-01_my_diary_12.txt").unwrap();
        assert_eq!(parsed.label.as_str(), "my_diary");
        assert_eq!(parsed.seq, Some(12));
    }

    #[test]
    fn parse_numeric_label_without_sequence() {
        let parsed = DatedName::parse("2025-06-01_2024.txt").unwrap();
        assert_eq!(parsed.label.as_str(), "2024");
        assert_eq!(parsed.seq, None);
    }

    #[test]
    fn parse_rejects_other_names() {
        assert!(DatedName::parse("notes.txt").is_none());
        assert!(DatedName::parse("2025-06-01_x.md").is_none());
        assert!(DatedName::parse("2025-13-01_x.txt").is_none());
        assert!(DatedName::parse("2025-06-01_.txt").is_none());
    }

    #[test]
    fn dated_round_trips_through_note_name() {
        let label = Label::new("journal").unwrap();
        let original = DatedName::base(date(2024, 2, 29), &label).with_seq(1);
        let name = original.to_note_name();
        assert_eq!(name.dated(), Some(original));
    }
}
