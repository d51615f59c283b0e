//! # Storage Layer
//!
//! The address book lives in memory while the program runs. A [`DataStore`] reads it
//! once at startup and writes it back in one piece on shutdown.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding the list of records.
//!   A missing file is an empty book.
//! - [`memory::InMemoryStore`]: keeps the last saved book in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "John", "phones": ["0501234567"], "birthday": "06.01.1990" },
//!   { "name": "Jane", "phones": [], "birthday": null }
//! ]
//! ```

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

/// Whole-book persistence.
pub trait DataStore {
    /// Read the stored book, or an empty one if nothing was saved yet.
    fn load_book(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save_book(&mut self, book: &AddressBook) -> Result<()>;
}
