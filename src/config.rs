//! Configuration loading for searchdeck
//!
//! Reads `~/.config/searchdeck/config.toml` (or an explicit path) into [`Config`].

mod loader;
mod types;

pub use loader::{default_config_path, load_config, parse_config};
pub use types::{AutocompleteConfig, Config, PanelsConfig, ServerConfig, DEFAULT_BASE_URL};
