use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// What to do when the first row of an existing log is not the canonical header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    /// Rewrite the header and keep every data row.
    #[default]
    Migrate,
    /// Refuse to touch the file.
    Abort,
    /// Replace the whole file with a bare header (drops all rows).
    Overwrite,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub header_policy: HeaderPolicy,
}

fn default_log_file() -> String {
    "time.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            header_policy: HeaderPolicy::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeactions")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timeactions")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeactions.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolved path of the CSV log (`~/` expanded, relative paths kept relative
    /// to the working directory).
    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write the default configuration file if it does not exist yet.
    /// Returns `true` when a new file was written.
    pub fn init_file() -> AppResult<bool> {
        let path = Self::config_file();
        if path.exists() {
            return Ok(false);
        }

        fs::create_dir_all(Self::config_dir())?;
        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(true)
    }
}
