//! File I/O and the note store

mod fs;
mod store;

pub use fs::{FsError, create_text, read_text, scan_notes_directory, write_text};
pub use store::NoteStore;
