use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version)]
#[command(about = "Address book with birthday reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file to use instead of the one in the data directory
    #[arg(short, long, global = true, env = "ROLODEX_FILE", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Use the per-user data directory instead of the current directory
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Date to treat as today (YYYY-MM-DD)
    #[arg(long, global = true, env = "ROLODEX_TODAY", hide = true)]
    pub today: Option<NaiveDate>,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Contacts,
    Birthdays,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Contacts => "Contact Commands:",
            CommandGroup::Birthdays => "Birthday Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "change" | "phone" | "remove-phone" | "all" | "delete" => {
                Some(CommandGroup::Contacts)
            }
            "add-birthday" | "show-birthday" | "birthdays" => Some(CommandGroup::Birthdays),
            "config" | "shell" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Contacts,
            CommandGroup::Birthdays,
            CommandGroup::Misc,
        ]
    }
}

/// Command list shown by `help` inside the interactive loop.
pub fn shell_help() -> String {
    let cmd = Cli::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    for group in CommandGroup::all() {
        output.push_str(&format!("{}\n", group.heading()));

        if group == &CommandGroup::Misc {
            output.push_str(&format!("  {:<28} {}\n", "hello", "Say hello"));
            output.push_str(&format!("  {:<28} {}\n", "help", "Show this list"));
            output.push_str(&format!("  {:<28} {}\n", "close, exit", "Save and quit"));
            continue;
        }

        let group_cmds = subcommands.iter().filter(|sc| {
            !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
        });
        for sc in group_cmds {
            let usage: Vec<String> = sc
                .get_positionals()
                .map(|arg| format!("<{}>", arg.get_id()))
                .collect();
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            let signature = format!("{} {}", sc.get_name(), usage.join(" "));
            output.push_str(&format!("  {:<28} {}\n", signature.trim_end(), about));
        }
        output.push('\n');
    }
    output
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Contact(ContactCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

/// Commands available both from the shell and in the interactive loop.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ContactCommands {
    /// Add a contact, or a phone to an existing contact
    #[command(display_order = 1)]
    Add { name: String, phone: String },

    /// Replace one of a contact's phones
    #[command(display_order = 2)]
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },

    /// Show a contact's phones
    #[command(display_order = 3)]
    Phone { name: String },

    /// Remove a phone from a contact
    #[command(display_order = 4)]
    RemovePhone { name: String, phone: String },

    /// List all contacts
    #[command(display_order = 5)]
    All,

    /// Delete a contact
    #[command(display_order = 6)]
    Delete { name: String },

    /// Set a contact's birthday (DD.MM.YYYY)
    #[command(display_order = 7)]
    AddBirthday { name: String, birthday: String },

    /// Show a contact's birthday
    #[command(display_order = 8)]
    ShowBirthday { name: String },

    /// Birthdays coming up in the next days
    #[command(display_order = 9)]
    Birthdays,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 20)]
    Config {
        /// Configuration key (window-days, file-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Start the interactive assistant (the default)
    #[command(display_order = 21)]
    Shell,
}
