//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every rolodex operation, whatever the UI.
//!
//! `RolodexApi` owns the in-memory [`AddressBook`]: it is read from the store when
//! the facade is built and written back by [`RolodexApi::close`] (or
//! [`RolodexApi::save`]). Commands in between only touch memory.
//!
//! The facade does no printing and holds no business logic. It is generic over
//! [`DataStore`], so tests run against `InMemoryStore`.

use crate::book::AddressBook;
use crate::commands;
use crate::config::RolodexConfig;
use crate::error::Result;
use crate::store::DataStore;
use chrono::NaiveDate;
use tracing::debug;

/// The main API facade for rolodex operations.
pub struct RolodexApi<S: DataStore> {
    store: S,
    paths: commands::RolodexPaths,
    config: RolodexConfig,
    book: AddressBook,
}

impl<S: DataStore> RolodexApi<S> {
    /// Builds the facade and loads the address book from `store`.
    pub fn new(store: S, paths: commands::RolodexPaths, config: RolodexConfig) -> Result<Self> {
        let book = store.load_book()?;
        Ok(Self {
            store,
            paths,
            config,
            book,
        })
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn change_phone(
        &mut self,
        name: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> Result<commands::CmdResult> {
        commands::change::run(&mut self.book, name, old_phone, new_phone)
    }

    pub fn show_phones(&self, name: &str) -> Result<commands::CmdResult> {
        commands::phone::show(&self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<commands::CmdResult> {
        commands::phone::remove(&mut self.book, name, phone)
    }

    pub fn show_all(&self) -> Result<commands::CmdResult> {
        commands::all::run(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<commands::CmdResult> {
        commands::birthday::add(&mut self.book, name, birthday)
    }

    pub fn show_birthday(&self, name: &str) -> Result<commands::CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    /// Birthdays within the configured window, counting from `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::upcoming::run(&self.book, today, self.config.window_days)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Writes the whole address book to the store.
    pub fn save(&mut self) -> Result<()> {
        debug!(contacts = self.book.len(), "saving address book");
        self.store.save_book(&self.book)
    }

    /// Saves and hands back the store.
    pub fn close(mut self) -> Result<S> {
        self.save()?;
        Ok(self.store)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RolodexPaths};
