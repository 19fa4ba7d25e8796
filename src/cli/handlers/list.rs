//! List command handler.

use anyhow::{Context, Result};
use std::io::{self, Write};

use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{DATE_FORMAT, NoteName};
use crate::infra::NoteStore;

pub fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    let notes = store
        .list_notes()
        .with_context(|| format!("failed to list notes in {}", store.dir().display()))?;

    let stdout = io::stdout();
    write_listing(&mut stdout.lock(), args.format, store, &notes)
}

/// Renders a listing in the requested format.
pub(crate) fn write_listing<W: Write>(
    out: &mut W,
    format: OutputFormat,
    store: &NoteStore,
    notes: &[NoteName],
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                writeln!(out, "No notes found.")?;
            } else {
                for (i, name) in notes.iter().enumerate() {
                    writeln!(out, "{:>3}. {}", i + 1, name)?;
                }
                writeln!(out)?;
                writeln!(out, "{} note(s)", notes.len())?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let dated = name.dated();
                    NoteListing {
                        index: i + 1,
                        name: name.to_string(),
                        path: store.path_of(name).to_string_lossy().to_string(),
                        date: dated
                            .as_ref()
                            .map(|d| d.date.format(DATE_FORMAT).to_string()),
                        seq: dated.and_then(|d| d.seq),
                    }
                })
                .collect();
            let output = Output::new(listings);
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Paths => {
            for name in notes {
                writeln!(out, "{}", store.path_of(name).display())?;
            }
        }
    }

    Ok(())
}
