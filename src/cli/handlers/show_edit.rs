//! Show and Edit command handlers.

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;

use super::new::open_in_editor;
use super::read_body;
use crate::cli::config::Config;
use crate::cli::selection::resolve_note;
use crate::cli::{EditArgs, ShowArgs};
use crate::infra::NoteStore;

pub fn handle_show(args: &ShowArgs, store: &NoteStore) -> Result<()> {
    let name = resolve_note(store, &args.note)?;
    let note = store
        .load(&name)
        .with_context(|| format!("failed to read note: {}", store.path_of(&name).display()))?;
    let content = note.content();

    if content.ends_with('\n') || content.is_empty() {
        print!("{}", content);
    } else {
        println!("{}", content);
    }

    Ok(())
}

/// Trait for launching an editor (allows mocking in tests).
pub(crate) trait EditorLauncher {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Internal implementation that accepts a generic editor launcher and input.
pub(crate) fn handle_edit_impl<E: EditorLauncher, R: BufRead>(
    args: &EditArgs,
    store: &NoteStore,
    editor: &E,
    input: &mut R,
) -> Result<()> {
    let name = resolve_note(store, &args.note)?;
    let path = store.path_of(&name);

    if args.editor {
        editor.open(&path)?;
        println!("Edited: {}", name);
        return Ok(());
    }

    let body = read_body(args.message.as_deref(), input)?;
    store
        .overwrite_note(&name, &body)
        .with_context(|| format!("failed to save note: {}", path.display()))?;

    println!("Saved: {}", name);
    Ok(())
}

pub fn handle_edit(args: &EditArgs, store: &NoteStore, config: &Config) -> Result<()> {
    struct RealEditor<'a>(&'a Config);
    impl EditorLauncher for RealEditor<'_> {
        fn open(&self, path: &Path) -> Result<()> {
            open_in_editor(path, self.0)
        }
    }
    handle_edit_impl(args, store, &RealEditor(config), &mut io::stdin().lock())
}
