//! Command handlers for the CLI.

mod list;
mod menu;
mod new;
mod save_as;
mod show_edit;


use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::io::BufRead;

use crate::cli::prompt::read_until_sentinel;

// Re-export public items
pub use list::handle_list;
pub use menu::handle_menu;
pub use new::{NewNoteResult, create_new_note, handle_new};
pub use save_as::handle_save_as;
pub use show_edit::{handle_edit, handle_show};

// Re-export for tests
#[cfg(test)]
pub(crate) use list::write_listing;
#[cfg(test)]
pub(crate) use save_as::resolve_save_path;
#[cfg(test)]
pub(crate) use show_edit::{EditorLauncher, handle_edit_impl};

// ===========================================
// Shared Utilities
// ===========================================

/// Today's date in the local time zone.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Returns the `-m` text if given, otherwise reads input up to the `end` line.
pub(crate) fn read_body<R: BufRead>(message: Option<&str>, input: &mut R) -> Result<String> {
    match message {
        Some(text) => Ok(text.to_string()),
        None => read_until_sentinel(input).with_context(|| "failed to read note text from stdin"),
    }
}
