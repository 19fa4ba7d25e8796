//! Picking a note by number or by name.

use anyhow::Result;
use thiserror::Error;

use crate::domain::{NOTE_EXTENSION, NoteName};
use crate::infra::NoteStore;

/// A user's note selection could not be honored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a note number")]
    NotANumber(String),

    #[error("note number {index} is out of range (1-{count})")]
    OutOfRange { index: usize, count: usize },

    #[error("there are no notes yet")]
    NoNotes,

    #[error("note not found: '{0}'")]
    NotFound(String),
}

/// Picks a note by its 1-based position in `notes`.
///
/// # Errors
///
/// Returns `SelectionError::NotANumber` for non-numeric input and
/// `SelectionError::OutOfRange` for 0 or positions past the end.
pub fn select_by_index<'a>(
    notes: &'a [NoteName],
    input: &str,
) -> Result<&'a NoteName, SelectionError> {
    if notes.is_empty() {
        return Err(SelectionError::NoNotes);
    }

    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;

    if index == 0 || index > notes.len() {
        return Err(SelectionError::OutOfRange {
            index,
            count: notes.len(),
        });
    }

    Ok(&notes[index - 1])
}

/// Resolves a note reference against the store's listing.
///
/// Accepts, in order: an exact file name, a 1-based number, or a file name
/// without its `.txt` extension.
pub fn resolve_note(store: &NoteStore, reference: &str) -> Result<NoteName> {
    let notes = store.list_notes()?;
    let reference = reference.trim();

    if let Some(found) = notes.iter().find(|n| n.as_str() == reference) {
        return Ok(found.clone());
    }

    if reference.chars().all(|c| c.is_ascii_digit()) && !reference.is_empty() {
        return Ok(select_by_index(&notes, reference)?.clone());
    }

    let with_extension = format!("{}.{}", reference, NOTE_EXTENSION);
    notes
        .into_iter()
        .find(|n| n.as_str() == with_extension)
        .ok_or_else(|| SelectionError::NotFound(reference.to_string()).into())
}
