//! A note loaded from the storage directory.

use std::path::{Path, PathBuf};

use crate::domain::NoteName;

/// A single plain-text note.
///
/// The file on disk is the owner of the data; this is a snapshot taken at
/// read time and is not kept in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    name: NoteName,
    content: String,
    path: PathBuf,
}

impl Note {
    pub fn new(name: NoteName, content: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            content: content.into(),
            path: path.into(),
        }
    }

    pub fn name(&self) -> &NoteName {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
