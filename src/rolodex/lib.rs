//! # Rolodex Architecture
//!
//! Rolodex is a small address book: contacts with phone numbers and a birthday,
//! kept in a JSON file, with a query for the birthdays coming up in the next days.
//! Like any library that happens to have a CLI client, the core knows nothing
//! about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Arguments, the interactive loop, colored output          │
//! │  - Turns errors into one-line messages                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the in-memory AddressBook, loads and saves it       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per command over &mut AddressBook           │
//! │  - Returns CmdResult (data + messages)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain (fields, model, book, birthdays)                    │
//! │  - Validated values, Record, AddressBook, birthday window   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence sits beside the API behind the [`store::DataStore`] trait.
//!
//! ## Key Principle: No I/O in the Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never reads the clock: "today" is always passed in. Only the store
//! and the API emit `tracing` events.
//!
//! ## Module Overview
//!
//! - [`fields`]: `PhoneNumber`, `Birthday` and `ValidationError`
//! - [`model`]: `Record`
//! - [`book`]: `AddressBook`
//! - [`birthdays`]: the upcoming-birthdays window
//! - [`commands`]: business logic per command
//! - [`api`]: the facade used by the CLI
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod api;
pub mod birthdays;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod store;
