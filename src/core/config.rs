//! User configuration for commit list rendering.
//!
//! The configuration lives in `config.json` under the platform config
//! directory (see [`get_config_directory`]). A missing file means defaults;
//! a file that exists but cannot be read or parsed is an error. This module
//! only ever reads.

use crate::core::dirs::get_config_directory;
use crate::core::error::{CommitRowsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FormatterConfig {
    /// Pipe-delimited column template, e.g. `"short-sha|author|message"`
    pub commit_template: String,
    /// Show the fixed full description layout instead of the template
    pub full_description: bool,
}

impl FormatterConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(CommitRowsError::ConfigDirectoryNotFound) => {
                log::warn!("No config directory available, using default settings");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CommitRowsError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| CommitRowsError::config_parse_failed(path, e))
    }
}
