//! The interactive assistant.
//!
//! Reads one command per line, `command arg1 arg2 ...`, split on whitespace. The
//! command word is case-insensitive and extra arguments are ignored. The address
//! book is saved once, when the loop ends with `close`, `exit` or end of input.

use super::commands::execute_and_print;
use super::render::write_messages;
use super::setup::{shell_help, ContactCommands};
use chrono::NaiveDate;
use rolodex::api::{CmdMessage, RolodexApi};
use rolodex::error::{Result, RolodexError};
use rolodex::store::DataStore;
use std::io::{BufRead, Write};

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";
const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const INVALID: &str = "Invalid command.";

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Line {
    Run(ContactCommands),
    Hello,
    Help,
    Exit,
    Invalid,
}

/// Splits a line into a lowercased command word and its arguments.
pub(super) fn parse_input(input: &str) -> (String, Vec<String>) {
    let mut parts = input.split_whitespace();
    match parts.next() {
        Some(command) => (command.to_lowercase(), parts.map(str::to_string).collect()),
        None => (String::new(), Vec::new()),
    }
}

pub(super) fn parse_line(input: &str) -> Result<Line> {
    let (command, args) = parse_input(input);
    let mut args = args.into_iter();
    let mut next = || args.next().ok_or(RolodexError::NotEnoughArguments);

    let line = match command.as_str() {
        "close" | "exit" => Line::Exit,
        "hello" => Line::Hello,
        "help" => Line::Help,
        "add" => Line::Run(ContactCommands::Add {
            name: next()?,
            phone: next()?,
        }),
        "change" => Line::Run(ContactCommands::Change {
            name: next()?,
            old_phone: next()?,
            new_phone: next()?,
        }),
        "phone" => Line::Run(ContactCommands::Phone { name: next()? }),
        "remove-phone" => Line::Run(ContactCommands::RemovePhone {
            name: next()?,
            phone: next()?,
        }),
        "all" => Line::Run(ContactCommands::All),
        "delete" => Line::Run(ContactCommands::Delete { name: next()? }),
        "add-birthday" => Line::Run(ContactCommands::AddBirthday {
            name: next()?,
            birthday: next()?,
        }),
        "show-birthday" => Line::Run(ContactCommands::ShowBirthday { name: next()? }),
        "birthdays" => Line::Run(ContactCommands::Birthdays),
        _ => Line::Invalid,
    };
    Ok(line)
}

/// Runs the loop until `close`/`exit` or end of input, then saves the book and
/// hands back the store.
pub(super) fn run_loop<S, R, W>(
    mut api: RolodexApi<S>,
    today: Option<NaiveDate>,
    mut input: R,
    out: &mut W,
) -> Result<S>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", WELCOME)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut buffer = String::new();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(out)?;
            break;
        }

        match parse_line(&buffer) {
            Ok(Line::Exit) => break,
            Ok(Line::Hello) => writeln!(out, "{}", GREETING)?,
            Ok(Line::Help) => write!(out, "{}", shell_help())?,
            Ok(Line::Invalid) => writeln!(out, "{}", INVALID)?,
            Ok(Line::Run(command)) => {
                execute_and_print(&mut api, &command, today, out)?;
            }
            Err(e) => write_messages(out, &[CmdMessage::error(e.user_message())])?,
        }
    }

    let store = api.close()?;
    writeln!(out, "{}", FAREWELL)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex::api::RolodexPaths;
    use rolodex::config::RolodexConfig;
    use rolodex::book::AddressBook;
    use rolodex::model::Record;
    use rolodex::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn session(store: InMemoryStore, input: &str) -> (InMemoryStore, String) {
        colored::control::set_override(false);
        let paths = RolodexPaths {
            data_dir: PathBuf::from("."),
            book_file: PathBuf::from("addressbook.json"),
        };
        let api = RolodexApi::new(store, paths, RolodexConfig::default()).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1);
        let mut out = Vec::new();
        let store = run_loop(api, today, Cursor::new(input.to_string()), &mut out).unwrap();
        (store, String::from_utf8(out).unwrap())
    }

    fn store_with_john() -> InMemoryStore {
        let mut john = Record::new("John").unwrap();
        john.add_phone("0501234567").unwrap();
        let mut book = AddressBook::new();
        book.add_record(john);
        InMemoryStore::with_book(book)
    }

    #[test]
    fn parse_input_lowercases_command_only() {
        assert_eq!(
            parse_input("  ADD John 0501234567 \n"),
            (
                "add".to_string(),
                vec!["John".to_string(), "0501234567".to_string()]
            )
        );
        assert_eq!(parse_input("   "), (String::new(), Vec::new()));
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("add John 0501234567").unwrap(),
            Line::Run(ContactCommands::Add {
                name: "John".into(),
                phone: "0501234567".into()
            })
        );
        assert_eq!(
            parse_line("Show-Birthday John").unwrap(),
            Line::Run(ContactCommands::ShowBirthday {
                name: "John".into()
            })
        );
        assert_eq!(parse_line("close").unwrap(), Line::Exit);
        assert_eq!(parse_line("EXIT").unwrap(), Line::Exit);
        assert_eq!(parse_line("hello there").unwrap(), Line::Hello);
        assert_eq!(parse_line("fly away").unwrap(), Line::Invalid);
        assert_eq!(parse_line("").unwrap(), Line::Invalid);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(
            parse_line("phone John Smith").unwrap(),
            Line::Run(ContactCommands::Phone {
                name: "John".into()
            })
        );
    }

    #[test]
    fn missing_arguments() {
        for line in ["add John", "change John 0501234567", "phone", "add-birthday John"] {
            assert!(
                matches!(parse_line(line), Err(RolodexError::NotEnoughArguments)),
                "{line:?} should need more arguments"
            );
        }
    }

    #[test]
    fn full_session() {
        let input = "\
hello
add John 0501234567
add John 0679876543
phone John
add-birthday John 06.01.1990
show-birthday John
birthdays
all
exit
";
        let (store, out) = session(InMemoryStore::new(), input);

        let expected = "\
Welcome to the assistant bot!
Enter a command: How can I help you?
Enter a command: Contact added.
Enter a command: Contact updated.
Enter a command: 0501234567, 0679876543
Enter a command: Birthday added.
Enter a command: 06.01.1990
Enter a command: 2024-01-08: John
Enter a command: John: 0501234567; 0679876543; birthday: 06.01.1990
Enter a command: Good bye!
";
        assert_eq!(out, expected);
        assert_eq!(store.saves(), 1);
        assert_eq!(store.book().find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn errors_never_stop_the_loop() {
        let input = "\
add John
add John 123
change Ghost 0501234567 0679876543
show-birthday John
add-birthday John 31.02.2020
dance
close
";
        let (store, out) = session(InMemoryStore::new(), input);

        assert!(out.contains("Enter a command: Not enough arguments.\n"));
        assert!(out.contains("Enter a command: Phone number must be 10 digits.\n"));
        assert!(out.contains("Enter a command: Contact not found.\n"));
        assert!(out.contains("Enter a command: Invalid command.\n"));
        assert!(out.ends_with("Good bye!\n"));
        assert!(store.book().is_empty());
    }

    #[test]
    fn change_reports_missing_old_phone() {
        let (_, out) = session(
            store_with_john(),
            "change John 0000000000 0679876543\nchange John 0501234567 0679876543\nexit\n",
        );
        assert!(out.contains("Old phone not found.\n"));
        assert!(out.contains("Phone updated.\n"));
    }

    #[test]
    fn end_of_input_saves_like_exit() {
        let (store, out) = session(InMemoryStore::new(), "add Jane 0501234567\n");
        assert!(out.ends_with("Good bye!\n"));
        assert_eq!(store.saves(), 1);
        assert!(store.book().find("Jane").is_some());
    }

    #[test]
    fn empty_birthday_list() {
        let (_, out) = session(store_with_john(), "birthdays\nexit\n");
        assert!(out.contains("No birthdays in the next week.\n"));
    }
}
