//! Configuration for the dirnote application.
//!
//! Configuration is a read-only snapshot taken at invocation start and
//! passed explicitly into the naming pipeline; nothing in the pipeline
//! reads ambient process-wide state.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::{ProjectDirs, UserDirs};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DirnoteError, Result};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Base directory under which note directories are created
    pub notes_dir: PathBuf,

    /// Preserve hyphens inside multi-word keywords; when false the words
    /// of a keyword are joined with no separator
    pub allow_multiword_keywords: bool,

    /// Sort keywords lexicographically before joining
    pub sort_keywords: bool,

    /// Extra characters stripped before slugification, appended to the
    /// built-in punctuation set
    pub extra_punctuation: String,

    /// Static candidate keyword list, merged with keywords inferred from
    /// existing directory names
    pub known_keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let notes_dir = UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notes");

        Config {
            notes_dir,
            allow_multiword_keywords: true,
            sort_keywords: true,
            extra_punctuation: String::new(),
            known_keywords: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the given file, or from the platform config
    /// directory when no path is supplied. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => {
                    debug!("No platform config directory available, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        debug!("Loading config from {}", config_path.display());
        let content = fs::read_to_string(&config_path)?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| DirnoteError::ConfigError {
                message: format!("{}: {}", config_path.display(), e),
            })?;
        Ok(config)
    }

    /// Default location of the configuration file.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dirnote")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
