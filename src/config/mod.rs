//! Configuration module for Wits.
//!
//! All configuration is loaded from environment variables (optionally seeded
//! from a `.env` file) with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::errors::AppError;

/// File name of the persisted strain collection inside the wits directory.
pub const STRAINS_FILE: &str = "strains.yml";

/// Where strain records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Records die with the process.
    InMemory,
    /// Records are mirrored to a YAML file in the wits directory.
    YmlFile,
}

impl StorageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageMode::InMemory => "in-memory",
            StorageMode::YmlFile => "yml-file",
        }
    }

    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim() {
            "in-memory" => Ok(StorageMode::InMemory),
            "yml-file" => Ok(StorageMode::YmlFile),
            other => Err(AppError::Config(format!(
                "Unknown storage mode {:?} (expected \"in-memory\" or \"yml-file\")",
                other
            ))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage backend selector
    pub storage_mode: StorageMode,
    /// Base directory for application data
    pub wits_dir: PathBuf,
    /// Log directory, relative to `wits_dir`
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`
    pub log_file: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_mode = match lookup("STORAGE_MODE") {
            Some(mode) => StorageMode::parse(&mode)?,
            None => StorageMode::YmlFile,
        };

        let wits_dir = lookup("WITS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_wits_dir);

        let log_dir = lookup("LOG_DIR")
            .unwrap_or_else(|| "logs".to_string())
            .into();

        let log_file = lookup("LOG_FILE").unwrap_or_else(|| "wits.log".to_string());

        let log_level = lookup("WITS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            storage_mode,
            wits_dir,
            log_dir,
            log_file,
            log_level,
        })
    }

    /// Apply command line overrides on top of the environment.
    pub fn apply_overrides(&mut self, storage_mode: Option<StorageMode>, wits_dir: Option<PathBuf>) {
        if let Some(mode) = storage_mode {
            self.storage_mode = mode;
        }
        if let Some(dir) = wits_dir {
            self.wits_dir = dir;
        }
    }

    /// Path of the YAML file backing the file store.
    pub fn strains_path(&self) -> PathBuf {
        self.wits_dir.join(STRAINS_FILE)
    }

    /// Directory holding the log file.
    pub fn log_dir_path(&self) -> PathBuf {
        self.wits_dir.join(&self.log_dir)
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir_path().join(&self.log_file)
    }
}

fn default_wits_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".wits"))
        .unwrap_or_else(|| PathBuf::from(".wits"))
}
