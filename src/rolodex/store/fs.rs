use super::DataStore;
use crate::book::AddressBook;
use crate::error::{Result, RolodexError};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RolodexError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no address book yet, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RolodexError::Io)?;
        let book: AddressBook =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        info!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;
        fs::write(&self.path, content).map_err(RolodexError::Io)?;
        info!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}
