use std::path::PathBuf;

use thiserror::Error;

/// Startup errors for searchdeck
#[derive(Debug, Error)]
pub enum SearchDeckError {
    #[error("Failed to read config file {path}: {message}")]
    ConfigRead { path: PathBuf, message: String },

    #[error("Invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid server URL '{url}': {message}")]
    InvalidServerUrl { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
