//! Interactive menu handler.

use anyhow::{Context, Result};
use std::io;

use super::today;
use crate::cli::menu::run_menu;
use crate::cli::prompt::Prompter;
use crate::cli::session::EditorSession;
use crate::domain::Label;
use crate::infra::NoteStore;

pub fn handle_menu(store: NoteStore, label: Label) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    let mut session = EditorSession::new(store, label);

    run_menu(&mut prompter, &mut session, today).with_context(|| "terminal I/O failed")
}
