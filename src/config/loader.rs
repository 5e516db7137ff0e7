use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::SearchDeckError;

const CONFIG_DIR: &str = "searchdeck";
const CONFIG_FILE: &str = "config.toml";

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// An explicit `path` must exist. Without one, the default location is tried
/// and a missing file yields `Config::default()`.
pub fn load_config(path: Option<&Path>) -> Result<Config, SearchDeckError> {
    if let Some(path) = path {
        return read_config(path);
    }

    let Some(path) = default_config_path() else {
        return Ok(Config::default());
    };

    match fs::read_to_string(&path) {
        Ok(contents) => parse_config(&contents, &path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(SearchDeckError::ConfigRead {
            path,
            message: e.to_string(),
        }),
    }
}

fn read_config(path: &Path) -> Result<Config, SearchDeckError> {
    let contents = fs::read_to_string(path).map_err(|e| SearchDeckError::ConfigRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_config(&contents, path)
}

pub fn parse_config(contents: &str, path: &Path) -> Result<Config, SearchDeckError> {
    toml::from_str::<Config>(contents).map_err(|e| SearchDeckError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
