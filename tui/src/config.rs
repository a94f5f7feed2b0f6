//! Configuration file loading.
//!
//! The configuration file is located at `~/.minefield/config.toml`:
//!
//! ```toml
//! [field]
//! width = 16
//! height = 16
//! mines = 40
//! ```
//!
//! Missing file, missing keys or a parse failure all fall back to the
//! defaults (9x9, 10 mines). Command line flags override the file.

use std::env;
use std::fs;
use std::path::PathBuf;

use minefield_core::FieldParams;
use serde::{Deserialize, Serialize};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default field parameters.
    pub field: FieldParams,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Self {
        if let Some(path) = config_path()
            && path.exists()
            && let Ok(content) = fs::read_to_string(&path)
            && let Ok(config) = toml::from_str(&content)
        {
            return config;
        }
        Self::default()
    }
}

/// `~/.minefield`, created on first use. Also hosts the log file.
pub fn state_dir() -> Option<PathBuf> {
    let dir = home_dir()?.join(".minefield");
    if !dir.exists() {
        let _ = fs::create_dir_all(&dir);
    }
    Some(dir)
}

fn config_path() -> Option<PathBuf> {
    state_dir().map(|dir| dir.join("config.toml"))
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
