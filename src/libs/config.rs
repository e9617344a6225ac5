//! Application configuration.
//!
//! Settings live in `config.json` inside the per-user data directory. A
//! missing file means defaults, so the tracker works without any setup.
//!
//! ```rust,no_run
//! use welltrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("database: {}", config.database_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::{Db, DB_FILE_NAME};
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Valid values of the mood and energy ratings.
pub const SCALE_RANGE: RangeInclusive<u8> = 1..=5;

pub const DEFAULT_ACTIVITY_CATEGORIES: [&str; 7] = ["Cardio", "Weight Training", "Yoga", "Walking", "Running", "Swimming", "Other"];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file; the data directory's `welltrack.db` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Activity types offered for new activities.
    pub activity_categories: Vec<String>,

    /// Seconds a connection waits on a locked database.
    pub busy_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: None,
            activity_categories: DEFAULT_ACTIVITY_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            busy_timeout_secs: 10,
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads a configuration file, falling back to defaults if it is absent.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup, starting from the current configuration.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let current = config.database_path()?;

        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(current.display().to_string())
            .interact_text()?;
        config.database_path = Some(PathBuf::from(path.trim()));

        Ok(config)
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(DataStorage::new().get_path(DB_FILE_NAME)?),
        }
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }

    /// Gateway for the configured database.
    pub fn db(&self) -> Result<Db> {
        Ok(Db::open(self.database_path()?).with_busy_timeout(self.busy_timeout()))
    }

    /// Case-insensitive lookup returning the configured spelling.
    pub fn find_category(&self, activity_type: &str) -> Option<&str> {
        let wanted = activity_type.trim();
        self.activity_categories.iter().find(|c| c.eq_ignore_ascii_case(wanted)).map(String::as_str)
    }
}
