//! Interactive numbered menu.

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::prompt::{END_SENTINEL, Prompter};
use crate::cli::selection::select_by_index;
use crate::cli::session::EditorSession;
use crate::domain::NoteName;

const RULE_WIDTH: usize = 50;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    OpenEdit,
    List,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Create),
            "2" => Some(MenuChoice::OpenEdit),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the user exits or input ends.
///
/// Bad input and failed operations are reported and the menu is shown
/// again; only errors writing to the terminal end the loop early.
pub fn run_menu<R, W, F>(
    prompter: &mut Prompter<R, W>,
    session: &mut EditorSession,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    let rule = "=".repeat(RULE_WIDTH);
    prompter.say(&rule)?;
    prompter.say("daybook - plain-text diary")?;
    prompter.say(&rule)?;

    loop {
        prompter.say("")?;
        prompter.say("Choose an action:")?;
        prompter.say("1. New note")?;
        prompter.say("2. Open / edit a note")?;
        prompter.say("3. List notes")?;
        prompter.say("4. Exit")?;

        let Some(answer) = prompter.ask("\nYour choice (1/2/3/4): ")? else {
            break;
        };

        let flow = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Create) => create_note(prompter, session, today())?,
            Some(MenuChoice::OpenEdit) => open_and_edit(prompter, session, &today)?,
            Some(MenuChoice::List) => {
                list_notes(prompter, session)?;
                Flow::Continue
            }
            Some(MenuChoice::Exit) => Flow::Exit,
            None => {
                prompter.say(format!(
                    "Invalid choice '{}': pick one of 1, 2, 3 or 4.",
                    answer
                ))?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    prompter.say("\nGoodbye!")?;
    Ok(())
}

fn create_note<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut EditorSession,
    today: NaiveDate,
) -> io::Result<Flow> {
    prompter.say("\n===== New note =====")?;
    prompter.say(format!(
        "Enter your note ('{}' on its own line saves it):",
        END_SENTINEL
    ))?;
    let body = prompter.read_until_sentinel()?;

    session.new_note(|| true);
    session.set_buffer(body);

    match session.save(today) {
        Ok(outcome) => {
            let path = outcome.path();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            prompter.say(format!("Saved note: {}", name))?;
            prompter.say(format!("Location: {}", display_absolute(path)))?;
        }
        Err(e) => prompter.say(format!("Could not save note: {}", e))?,
    }

    Ok(Flow::Continue)
}

fn open_and_edit<R, W, F>(
    prompter: &mut Prompter<R, W>,
    session: &mut EditorSession,
    today: &F,
) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    let Some(notes) = list_notes(prompter, session)? else {
        return Ok(Flow::Continue);
    };
    if notes.is_empty() {
        return Ok(Flow::Continue);
    }

    let Some(answer) = prompter.ask("\nNote number to open: ")? else {
        return Ok(Flow::Exit);
    };

    let name = match select_by_index(&notes, &answer) {
        Ok(name) => name.clone(),
        Err(e) => {
            prompter.say(format!("Invalid selection: {}", e))?;
            return Ok(Flow::Continue);
        }
    };

    if let Err(e) = session.open_note(&name) {
        prompter.say(format!("Could not read note: {}", e))?;
        return Ok(Flow::Continue);
    }

    prompter.say(format!("\n===== {} =====", session.title()))?;
    prompter.say(session.buffer())?;
    prompter.say("-".repeat(RULE_WIDTH))?;

    let Some(answer) = prompter.ask("Edit this note? (y to edit, anything else returns): ")? else {
        return Ok(Flow::Exit);
    };
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(Flow::Continue);
    }

    prompter.say(format!(
        "\nEnter the new content ('{}' on its own line overwrites the note):",
        END_SENTINEL
    ))?;
    let body = prompter.read_until_sentinel()?;
    session.set_buffer(body);

    match session.save(today()) {
        Ok(_) => prompter.say("Note updated.")?,
        Err(e) => prompter.say(format!("Could not save note: {}", e))?,
    }

    Ok(Flow::Continue)
}

/// Prints the numbered listing and returns it.
///
/// Returns `None` when the directory could not be read.
fn list_notes<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &EditorSession,
) -> io::Result<Option<Vec<NoteName>>> {
    prompter.say("\n===== Your notes =====")?;

    let notes = match session.store().list_notes() {
        Ok(notes) => notes,
        Err(e) => {
            prompter.say(format!("Could not list notes: {}", e))?;
            return Ok(None);
        }
    };

    if notes.is_empty() {
        prompter.say("No notes yet. Create one with option 1.")?;
    }
    for (i, name) in notes.iter().enumerate() {
        prompter.say(format!("{}. {}", i + 1, name))?;
    }

    Ok(Some(notes))
}

fn display_absolute(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
