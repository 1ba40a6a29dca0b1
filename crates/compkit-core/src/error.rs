//! Centralized error types for compkit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for compkit operations.
#[derive(Error, Debug)]
pub enum CompkitError {
    #[error("Invalid component name: '{0}'")]
    InvalidComponentName(String),

    #[error("Type '{0}' not found in schema")]
    TypeNotFound(String),

    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    #[error("Cannot watch '{}': path does not exist", .0.display())]
    WatchTarget(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Result type for compkit operations.
pub type CompkitResult<T> = Result<T, CompkitError>;

impl CompkitError {
    /// Create an invalid component name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidComponentName(name.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
