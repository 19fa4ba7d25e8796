//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod selection;
pub mod session;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::Label;
use output::OutputFormat;

/// daybook - a plain-text diary kept as dated .txt files
#[derive(Parser, Debug)]
#[command(name = "daybook", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Label used in generated note names (default: 我的日记)
    #[arg(short = 'l', long, global = true)]
    pub label: Option<Label>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu: create, open/edit, and list notes
    Menu,

    /// List notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Create a new note named after today's date
    New(NewArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Replace a note's contents
    Edit(EditArgs),

    /// Write text to an arbitrary path, replacing any existing file
    SaveAs(SaveAsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note text (read from stdin until a line `end` when omitted)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Open in your editor after creation
    #[arg(short, long)]
    pub edit: bool,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note number (as listed by `ls`) or file name
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note number (as listed by `ls`) or file name
    pub note: String,

    /// Replacement text (read from stdin until a line `end` when omitted)
    #[arg(short, long, conflicts_with = "editor")]
    pub message: Option<String>,

    /// Open the note in your editor instead of reading replacement text
    #[arg(short, long)]
    pub editor: bool,
}

/// Arguments for the `save-as` command
#[derive(Parser, Debug)]
pub struct SaveAsArgs {
    /// Destination file (`.txt` is appended when there is no extension)
    pub path: PathBuf,

    /// Note text (read from stdin until a line `end` when omitted)
    #[arg(short, long)]
    pub message: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
