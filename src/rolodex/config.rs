use crate::birthdays::DEFAULT_WINDOW_DAYS;
use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "rolodex.json";
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Configuration for rolodex, stored as `rolodex.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// How many days ahead `birthdays` looks
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Name of the address book file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_file_name() -> String {
    DEFAULT_BOOK_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            file_name: default_file_name(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RolodexError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RolodexError::Serialization)?;
        fs::write(config_path, content).map_err(RolodexError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "window-days" => Some(self.window_days.to_string()),
            "file-name" => Some(self.file_name.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "window-days" => self.set_window_days(value),
            "file-name" => self.set_file_name(value),
            _ => Err(RolodexError::Api(format!("Unknown config key: {}", key))),
        }
    }

    pub fn set_window_days(&mut self, raw: &str) -> Result<()> {
        self.window_days = raw
            .trim()
            .parse()
            .map_err(|_| RolodexError::Api(format!("Invalid number of days: {}", raw)))?;
        Ok(())
    }

    pub fn set_file_name(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(RolodexError::Api(format!("Invalid file name: {}", name)));
        }
        self.file_name = name.to_string();
        Ok(())
    }
}
