//! Configuration for the project tracker.
//!
//! The configuration currently carries the location of the SQLite database.
//! It is stored as pretty-printed JSON in `config.json` inside the per-user
//! data directory resolved by [`DataStorage`]. A missing file is not an
//! error: the defaults place `projects.db` next to where `config.json` would be.
//!
//! ```rust,no_run
//! use projects::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.database_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Database file. Relative paths are resolved against the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    pub fn file_path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    pub fn read() -> Result<Config> {
        Self::read_from(&Self::file_path()?)
    }

    /// Loads the configuration stored at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - JSON file to read
    ///
    /// # Returns
    ///
    /// Defaults when the file does not exist. An unreadable or malformed file
    /// is an error and is left as it is.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the saved configuration. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// The configured database file, or `projects.db` in the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    /// Interactive setup, seeded with the currently saved values.
    ///
    /// Fails without prompting when the saved file cannot be parsed, so a
    /// later [`Config::save`] never overwrites it with defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read()?;
        let current = config.database_path()?;

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.display().to_string())
            .interact_text()?;

        config.database.path = Some(PathBuf::from(path.trim()));
        Ok(config)
    }
}
