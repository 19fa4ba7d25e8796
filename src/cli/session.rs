//! Editor session: the current file and the unsaved edit buffer.
//!
//! Each method corresponds to one editor command (New, Open, Save,
//! Save As). The session is an ordinary value owned by whichever front-end
//! drives it.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::domain::{Label, NoteName};
use crate::infra::{FsError, NoteStore, read_text, write_text};

const APP_TITLE: &str = "daybook";

/// What a save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new dated note was created at this path.
    Created(PathBuf),
    /// The current file was replaced.
    Overwritten(PathBuf),
}

impl SaveOutcome {
    pub fn path(&self) -> &Path {
        match self {
            SaveOutcome::Created(p) | SaveOutcome::Overwritten(p) => p,
        }
    }
}

#[derive(Debug)]
pub struct EditorSession {
    store: NoteStore,
    label: Label,
    current: Option<PathBuf>,
    buffer: String,
}

impl EditorSession {
    pub fn new(store: NoteStore, label: Label) -> Self {
        Self {
            store,
            label,
            current: None,
            buffer: String::new(),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The file the buffer was loaded from or last saved to.
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Returns true if discarding the buffer would lose visible text.
    pub fn has_content(&self) -> bool {
        !self.buffer.trim().is_empty()
    }

    /// Starts a blank note.
    ///
    /// When the buffer holds text, `confirm` is asked first and a `false`
    /// answer leaves everything as it was. Returns whether the session was
    /// reset.
    pub fn new_note(&mut self, confirm: impl FnOnce() -> bool) -> bool {
        if self.has_content() && !confirm() {
            return false;
        }
        self.buffer.clear();
        self.current = None;
        true
    }

    /// Loads a file into the buffer.
    ///
    /// The file is read before anything changes, so on error the buffer
    /// and current path are untouched.
    pub fn open(&mut self, path: &Path) -> Result<(), FsError> {
        let content = read_text(path)?;
        self.buffer = content;
        self.current = Some(path.to_path_buf());
        log::debug!("opened {}", path.display());
        Ok(())
    }

    /// Loads a note from the store.
    pub fn open_note(&mut self, name: &NoteName) -> Result<(), FsError> {
        let path = self.store.path_of(name);
        self.open(&path)
    }

    /// Saves the buffer.
    ///
    /// Replaces the current file if there is one; otherwise creates a new
    /// note named after `today` and makes it current.
    pub fn save(&mut self, today: NaiveDate) -> Result<SaveOutcome, FsError> {
        if let Some(path) = &self.current {
            write_text(path, &self.buffer)?;
            return Ok(SaveOutcome::Overwritten(path.clone()));
        }

        let name = self
            .store
            .create_dated_note(today, &self.label, &self.buffer)?;
        let path = self.store.path_of(&name);
        self.current = Some(path.clone());
        Ok(SaveOutcome::Created(path))
    }

    /// Writes the buffer to `path` and makes it current.
    ///
    /// An existing file at `path` is replaced without asking.
    pub fn save_as(&mut self, path: &Path) -> Result<(), FsError> {
        write_text(path, &self.buffer)?;
        self.current = Some(path.to_path_buf());
        Ok(())
    }

    /// Window-style title naming the current file.
    pub fn title(&self) -> String {
        match self.current.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {}", name.to_string_lossy(), APP_TITLE),
            None => APP_TITLE.to_string(),
        }
    }
}
