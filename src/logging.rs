//! File logging
//!
//! The terminal belongs to the UI, so log lines go to a file. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};

use crate::error::SearchDeckError;

const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "searchdeck.log";

/// Where to log, if anywhere
///
/// An explicit path always wins. Debug builds fall back to the user cache
/// directory; release builds log nothing without one.
pub fn log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if cfg!(debug_assertions) {
        return dirs::cache_dir().map(|dir| dir.join("searchdeck").join(LOG_FILE));
    }
    None
}

/// Install the global logger writing to `path`
pub fn init_logging(path: &Path) -> Result<(), SearchDeckError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    let result = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    if result.is_err() {
        log::warn!("Logger already initialized, keeping it");
    }
    Ok(())
}
