//! The storage directory: a flat collection of `.txt` notes.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::domain::{DatedName, Label, Note, NoteName};
use crate::infra::fs::{FsError, create_text, read_text, scan_notes_directory, write_text};

/// How many times `create_dated_note` re-picks a name after losing a race.
const MAX_CREATE_ATTEMPTS: usize = 64;

/// Notes stored as plain-text files directly inside one directory.
///
/// Every operation is a single synchronous filesystem call with no state
/// carried between calls. The store does not lock the directory: two
/// processes writing the same directory are not coordinated.
#[derive(Debug, Clone)]
pub struct NoteStore {
    dir: PathBuf,
}

impl NoteStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the on-disk location of a note.
    pub fn path_of(&self, name: &NoteName) -> PathBuf {
        self.dir.join(name.as_str())
    }

    /// Returns true if anything (file, directory, dangling link) occupies the name.
    pub fn contains(&self, name: &NoteName) -> bool {
        std::fs::symlink_metadata(self.path_of(name)).is_ok()
    }

    /// Lists note names in directory order.
    ///
    /// An empty directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound` or `FsError::NotADirectory` if the storage
    /// directory is unusable.
    pub fn list_notes(&self) -> Result<Vec<NoteName>, FsError> {
        let names = scan_notes_directory(&self.dir)?;
        log::debug!("found {} note(s) in {}", names.len(), self.dir.display());
        Ok(names)
    }

    /// Picks the first unused name for `date` and `label`.
    ///
    /// Tries `YYYY-MM-DD_<label>.txt`, then `_1`, `_2`, ... until a name is
    /// free. The answer is only valid at the moment of the check: another
    /// writer can take the name before it is used. [`Self::create_dated_note`]
    /// closes that gap.
    pub fn generate_date_name(&self, date: NaiveDate, label: &Label) -> NoteName {
        let base = DatedName::base(date, label);
        let candidate = base.to_note_name();
        if !self.contains(&candidate) {
            return candidate;
        }

        let mut seq: u32 = 1;
        loop {
            let candidate = base.with_seq(seq).to_note_name();
            if !self.contains(&candidate) {
                return candidate;
            }
            seq += 1;
        }
    }

    /// Writes a new note, failing rather than replacing an existing file.
    ///
    /// # Errors
    ///
    /// Returns `FsError::AlreadyExists` if the name is taken, or the
    /// underlying I/O error.
    pub fn create_note(&self, name: &NoteName, content: &str) -> Result<PathBuf, FsError> {
        let path = self.path_of(name);
        create_text(&path, content)?;
        log::debug!("created {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }

    /// Writes a new note under a generated date-stamped name.
    ///
    /// If another writer claims the chosen name between the check and the
    /// write, the name is generated again. Under contention the suffixes
    /// handed out may therefore skip numbers.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, or `FsError::AlreadyExists` if every
    /// attempt lost its race.
    pub fn create_dated_note(
        &self,
        date: NaiveDate,
        label: &Label,
        content: &str,
    ) -> Result<NoteName, FsError> {
        let mut attempt = 1;
        loop {
            let name = self.generate_date_name(date, label);
            match self.create_note(&name, content) {
                Ok(_) => return Ok(name),
                Err(FsError::AlreadyExists { path }) if attempt < MAX_CREATE_ATTEMPTS => {
                    log::info!("{} was taken concurrently, retrying", path.display());
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads the full text of a note.
    ///
    /// # Errors
    ///
    /// Returns `FsError::NotFound`, `FsError::PermissionDenied`,
    /// `FsError::InvalidEncoding`, or another I/O error.
    pub fn read_note(&self, name: &NoteName) -> Result<String, FsError> {
        read_text(&self.path_of(name))
    }

    /// Reads a note along with its name and path.
    pub fn load(&self, name: &NoteName) -> Result<Note, FsError> {
        let path = self.path_of(name);
        let content = read_text(&path)?;
        Ok(Note::new(name.clone(), content, path))
    }

    /// Replaces the whole content of a note, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error; the previous content is left intact
    /// on failure.
    pub fn overwrite_note(&self, name: &NoteName, content: &str) -> Result<PathBuf, FsError> {
        let path = self.path_of(name);
        write_text(&path, content)?;
        log::debug!("overwrote {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }
}
