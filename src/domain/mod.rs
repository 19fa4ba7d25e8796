//! Core types: Label, NoteName, DatedName, Note

mod label;
mod note;
mod note_name;

pub use label::{DEFAULT_LABEL, Label, ParseLabelError};
pub use note::Note;
pub use note_name::{DATE_FORMAT, DatedName, NOTE_EXTENSION, NoteName, ParseNoteNameError};
