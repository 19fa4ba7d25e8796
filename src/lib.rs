//! daybook - a plain-text diary kept as dated .txt files

pub mod cli;
pub mod domain;
pub mod infra;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::LevelFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_edit, handle_list, handle_menu, handle_new, handle_save_as, handle_show},
};
use infra::NoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let label = config.label(cli.label.as_ref());
    let store = NoteStore::new(notes_dir);
    log::debug!("notes directory: {}", store.dir().display());

    match &cli.command {
        None | Some(Command::Menu) => handle_menu(store, label),
        Some(Command::List(args)) => handle_list(args, &store),
        Some(Command::New(args)) => handle_new(args, &store, &label, &config),
        Some(Command::Show(args)) => handle_show(args, &store),
        Some(Command::Edit(args)) => handle_edit(args, &store, &config),
        Some(Command::SaveAs(args)) => handle_save_as(args, store, label),
        Some(Command::Completions(args)) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "daybook",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// Maps `-v` occurrences to a log level; `RUST_LOG` still takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
