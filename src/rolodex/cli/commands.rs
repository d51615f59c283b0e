//! # CLI Layer
//!
//! This module is **one possible UI client** for rolodex. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Reads the system clock
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Modes
//!
//! - With a contact subcommand (`rolodex add John 0501234567`) the command runs once;
//!   the address book is saved if it changed.
//! - Without a subcommand (or with `shell`) the interactive loop in [`super::repl`]
//!   starts and saves on `close`/`exit`.
//!
//! ## Errors
//!
//! Anything a command rejects (bad phone, unknown contact, missing argument) is
//! printed as a one-line message and the program carries on. Only persistence
//! failures escape to `main` and end the process.

use super::render::{write_messages, write_result};
use super::repl;
use super::setup::{Cli, Commands, ContactCommands, MiscCommands};
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{CmdMessage, CmdResult, ConfigAction, RolodexApi, RolodexPaths};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::store::fs::FileStore;
use rolodex::store::DataStore;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: RolodexApi<FileStore>,
    today: Option<NaiveDate>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Contact(cmd)) => handle_once(ctx, &cmd),
        Some(Commands::Misc(MiscCommands::Config { key, value })) => {
            handle_config(&mut ctx, key, value)
        }
        Some(Commands::Misc(MiscCommands::Shell)) | None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            repl::run_loop(ctx.api, ctx.today, stdin.lock(), &mut stdout)?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let data_dir = match &cli.file {
        Some(file) => file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone()),
        None if cli.global => global_data_dir()?,
        None => cwd,
    };

    let config = RolodexConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
        RolodexConfig::default()
    });
    let book_file = cli
        .file
        .clone()
        .unwrap_or_else(|| data_dir.join(&config.file_name));
    debug!(book = %book_file.display(), "using address book");

    let store = FileStore::new(&book_file);
    let paths = RolodexPaths {
        data_dir,
        book_file,
    };
    let api = RolodexApi::new(store, paths, config)?;

    Ok(AppContext {
        api,
        today: cli.today,
    })
}

fn global_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Store("Could not determine the data directory".to_string()))
}

/// The date birthdays are counted from: the `--today` override or the local date.
pub(super) fn today(fixed: Option<NaiveDate>) -> NaiveDate {
    fixed.unwrap_or_else(|| Local::now().date_naive())
}

/// Runs one contact command against the in-memory book.
pub(super) fn execute<S: DataStore>(
    api: &mut RolodexApi<S>,
    command: &ContactCommands,
    fixed_today: Option<NaiveDate>,
) -> Result<CmdResult> {
    match command {
        ContactCommands::Add { name, phone } => api.add_contact(name, phone),
        ContactCommands::Change {
            name,
            old_phone,
            new_phone,
        } => api.change_phone(name, old_phone, new_phone),
        ContactCommands::Phone { name } => api.show_phones(name),
        ContactCommands::RemovePhone { name, phone } => api.remove_phone(name, phone),
        ContactCommands::All => api.show_all(),
        ContactCommands::Delete { name } => api.delete_contact(name),
        ContactCommands::AddBirthday { name, birthday } => api.add_birthday(name, birthday),
        ContactCommands::ShowBirthday { name } => api.show_birthday(name),
        ContactCommands::Birthdays => api.upcoming_birthdays(today(fixed_today)),
    }
}

/// Executes a command and prints its outcome, turning recoverable errors into a
/// message. Returns whether the book changed.
pub(super) fn execute_and_print<S: DataStore, W: Write>(
    api: &mut RolodexApi<S>,
    command: &ContactCommands,
    fixed_today: Option<NaiveDate>,
    out: &mut W,
) -> Result<bool> {
    match execute(api, command, fixed_today) {
        Ok(result) => {
            write_result(out, &result)?;
            Ok(result.modified)
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            write_messages(out, &[CmdMessage::error(e.user_message())])?;
            Ok(false)
        }
    }
}

fn handle_once(mut ctx: AppContext, command: &ContactCommands) -> Result<()> {
    let mut stdout = io::stdout();
    let modified = execute_and_print(&mut ctx.api, command, ctx.today, &mut stdout)?;
    if modified {
        ctx.api.close()?;
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    write_result(&mut io::stdout(), &result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex::store::memory::InMemoryStore;

    fn api() -> RolodexApi<InMemoryStore> {
        let paths = RolodexPaths {
            data_dir: PathBuf::from("."),
            book_file: PathBuf::from("addressbook.json"),
        };
        RolodexApi::new(InMemoryStore::new(), paths, RolodexConfig::default()).unwrap()
    }

    fn run_command(api: &mut RolodexApi<InMemoryStore>, command: ContactCommands) -> (bool, String) {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2024, 1, 1);
        let mut out = Vec::new();
        let modified = execute_and_print(api, &command, today, &mut out).unwrap();
        (modified, String::from_utf8(out).unwrap())
    }

    #[test]
    fn successful_command_reports_modification() {
        let mut api = api();
        let (modified, out) = run_command(
            &mut api,
            ContactCommands::Add {
                name: "John".into(),
                phone: "0501234567".into(),
            },
        );
        assert!(modified);
        assert_eq!(out, "Contact added.\n");
    }

    #[test]
    fn recoverable_errors_become_messages() {
        let mut api = api();
        let (modified, out) = run_command(
            &mut api,
            ContactCommands::Phone {
                name: "Ghost".into(),
            },
        );
        assert!(!modified);
        assert_eq!(out, "Contact not found.\n");

        let (_, out) = run_command(
            &mut api,
            ContactCommands::Add {
                name: "John".into(),
                phone: "050".into(),
            },
        );
        assert_eq!(out, "Phone number must be 10 digits.\n");
    }

    #[test]
    fn birthdays_use_fixed_today() {
        let mut api = api();
        api.add_contact("Alice", "0501234567").unwrap();
        api.add_birthday("Alice", "06.01.1990").unwrap();

        let (modified, out) = run_command(&mut api, ContactCommands::Birthdays);
        assert!(!modified);
        assert_eq!(out, "2024-01-08: Alice\n");
    }

    #[test]
    fn today_defaults_to_override() {
        let fixed = NaiveDate::from_ymd_opt(2030, 5, 17).unwrap();
        assert_eq!(today(Some(fixed)), fixed);
    }
}
