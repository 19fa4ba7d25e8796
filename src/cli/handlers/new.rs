//! New note command handler.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{read_body, today};
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::domain::{Label, NoteName};
use crate::infra::NoteStore;

/// Result of creating a new note (for testability).
#[derive(Debug)]
pub struct NewNoteResult {
    pub name: NoteName,
    pub path: PathBuf,
}

/// Creates a dated note for `date` holding `body`.
///
/// # Errors
///
/// Returns an error if the notes directory is missing or the write fails.
pub fn create_new_note(
    store: &NoteStore,
    label: &Label,
    date: NaiveDate,
    body: &str,
) -> Result<NewNoteResult> {
    if !store.dir().is_dir() {
        bail!("notes directory does not exist: {}", store.dir().display());
    }

    let name = store
        .create_dated_note(date, label, body)
        .with_context(|| format!("failed to create note in {}", store.dir().display()))?;
    let path = store.path_of(&name);

    Ok(NewNoteResult { name, path })
}

/// Opens a file in the user's configured editor.
pub(crate) fn open_in_editor(path: &Path, config: &Config) -> Result<()> {
    let editor = config.editor();

    // Parse editor command (may include args like "code --wait")
    let parts: Vec<&str> = editor.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        bail!("editor command is empty");
    };

    log::debug!("launching editor '{}' for {}", editor, path.display());
    let status = Command::new(cmd)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    if !status.success() {
        bail!("editor '{}' exited with non-zero status", editor);
    }

    Ok(())
}

pub fn handle_new(args: &NewArgs, store: &NoteStore, label: &Label, config: &Config) -> Result<()> {
    // With --edit and no -m the body comes from the editor, not stdin
    let body = if args.edit && args.message.is_none() {
        String::new()
    } else {
        read_body(args.message.as_deref(), &mut io::stdin().lock())?
    };

    let result = create_new_note(store, label, today(), &body)?;

    println!("Created: {}", result.name);
    println!("  {}", result.path.display());

    if args.edit {
        open_in_editor(&result.path, config)?;
    }

    Ok(())
}
