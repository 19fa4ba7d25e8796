//! Save-as command handler.

use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

use super::read_body;
use crate::cli::SaveAsArgs;
use crate::cli::session::EditorSession;
use crate::domain::{Label, NOTE_EXTENSION};
use crate::infra::NoteStore;

/// Resolves a save-as target.
///
/// Relative paths are taken from the notes directory, and `.txt` is added
/// when the file name has no extension.
pub(crate) fn resolve_save_path(store: &NoteStore, path: &Path) -> PathBuf {
    let path = store.dir().join(path);
    if path.extension().is_none() {
        path.with_extension(NOTE_EXTENSION)
    } else {
        path
    }
}

pub fn handle_save_as(args: &SaveAsArgs, store: NoteStore, label: Label) -> Result<()> {
    let path = resolve_save_path(&store, &args.path);
    let body = read_body(args.message.as_deref(), &mut io::stdin().lock())?;

    if path.exists() {
        log::info!("replacing existing file {}", path.display());
    }
    let mut session = EditorSession::new(store, label);
    session.set_buffer(body);
    session
        .save_as(&path)
        .with_context(|| format!("failed to save {}", path.display()))?;

    println!("Saved as: {}", path.display());
    Ok(())
}
