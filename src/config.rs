//! Runtime configuration
//!
//! Directories come from environment overrides, then the platform
//! defaults reported by `dirs`.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::export::CommandShare;

const APP_DIR: &str = "notecmd";
const DB_FILE: &str = "notes.db";

// Environment variable names
pub const ENV_HOME: &str = "NOTECMD_HOME";
pub const ENV_EXPORT_DIR: &str = "NOTECMD_EXPORT_DIR";
/// Share command line. Whitespace separates words, so a program or argument
/// containing spaces needs the JSON array form, e.g. `["/opt/My Tools/share", "-q"]`.
pub const ENV_SHARE_CMD: &str = "NOTECMD_SHARE_CMD";
pub const ENV_LOG: &str = "NOTECMD_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Holds the note database
    pub data_dir: PathBuf,
    /// Persistent location for export-as-file
    pub export_dir: PathBuf,
    /// Transient location for the share file
    pub share_dir: PathBuf,
    /// Command line used to share; sharing is unavailable without it
    pub share_command: Option<String>,
}

impl Config {
    /// Resolve from the process environment
    pub fn load(home: Option<&Path>) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), home)
    }

    /// Resolve using `lookup` in place of the environment.
    ///
    /// `home` replaces every directory with [`Config::rooted_at`]; the share
    /// command still comes from `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        home: Option<&Path>,
    ) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let share_command = non_empty(ENV_SHARE_CMD);

        if let Some(dir) = home {
            return Ok(Self {
                share_command,
                ..Self::rooted_at(dir)
            });
        }

        let data_dir = match non_empty(ENV_HOME) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| Error::InvalidInput("Could not find config directory".to_string()))?
                .join(APP_DIR),
        };

        let export_dir = non_empty(ENV_EXPORT_DIR)
            .map(PathBuf::from)
            .or_else(|| dirs::document_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| data_dir.join("exports"));

        let share_dir = dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join(APP_DIR);

        Ok(Self {
            data_dir,
            export_dir,
            share_dir,
            share_command,
        })
    }

    /// Everything under one directory, with no share command
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        Self {
            export_dir: data_dir.join("exports"),
            share_dir: data_dir.join("share"),
            data_dir,
            share_command: None,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    /// Share target built from `share_command`, if one is configured
    pub fn share_target(&self) -> Option<CommandShare> {
        self.share_command.as_deref().and_then(CommandShare::parse)
    }
}
