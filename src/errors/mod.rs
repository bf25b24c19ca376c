//! Error handling module for Wits.
//!
//! Provides the application error taxonomy with stable codes, so screens can
//! render a failure without knowing which layer produced it.

use thiserror::Error;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const ALREADY_EXISTS: &str = "ALREADY_EXISTS";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const PERSISTENCE_ERROR: &str = "PERSISTENCE_ERROR";
    pub const FORM_CANCELLED: &str = "FORM_CANCELLED";
    pub const FORM_INVALID: &str = "FORM_INVALID";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const TERMINAL_ERROR: &str = "TERMINAL_ERROR";
}

/// Application error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// A strain with the same product name is already stored
    #[error("Strain with product name {0:?} already exists")]
    AlreadyExists(String),
    /// No strain with the requested product name
    #[error("Strain with product name {0:?} not found")]
    NotFound(String),
    /// Reading, writing or (de)serializing the strain file failed
    #[error("{0}")]
    Persistence(String),
    /// The user aborted the strain form
    #[error("Strain form was cancelled")]
    FormCancelled,
    /// The strain form produced unusable input
    #[error("{0}")]
    FormInvalid(String),
    /// Invalid configuration value
    #[error("{0}")]
    Config(String),
    /// Terminal setup or drawing failed
    #[error("{0}")]
    Terminal(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::AlreadyExists(_) => codes::ALREADY_EXISTS,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Persistence(_) => codes::PERSISTENCE_ERROR,
            AppError::FormCancelled => codes::FORM_CANCELLED,
            AppError::FormInvalid(_) => codes::FORM_INVALID,
            AppError::Config(_) => codes::CONFIG_ERROR,
            AppError::Terminal(_) => codes::TERMINAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Code-prefixed text for status lines, e.g. `ALREADY_EXISTS: ...`.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.error_code(), self.message())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        AppError::Persistence(format!("I/O error: {}", err))
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        tracing::error!("YAML error: {:?}", err);
        AppError::Persistence(format!("YAML error: {}", err))
    }
}
