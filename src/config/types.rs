// Configuration type definitions

use serde::Deserialize;

/// Where the search backend listens unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Search backend section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
        }
    }
}

/// Autocomplete section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct AutocompleteConfig {
    /// Only apply the response to the most recently issued suggestion request.
    /// Off by default: whichever response arrives last is shown.
    #[serde(default)]
    pub discard_stale_responses: bool,
}

/// Which result-page panel containers exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PanelsConfig {
    #[serde(default = "enabled")]
    pub instant_answer: bool,
    #[serde(default = "enabled")]
    pub images: bool,
    #[serde(default = "enabled")]
    pub related_topics: bool,
}

fn enabled() -> bool {
    true
}

impl Default for PanelsConfig {
    fn default() -> Self {
        PanelsConfig {
            instant_answer: true,
            images: true,
            related_topics: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub panels: PanelsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert!(!config.autocomplete.discard_stale_responses);
        assert!(config.panels.instant_answer);
        assert!(config.panels.images);
        assert!(config.panels.related_topics);
    }

    #[test]
    fn test_full_config_parses() {
        let toml_content = r#"
[server]
base_url = "https://search.example.com"

[autocomplete]
discard_stale_responses = true

[panels]
instant_answer = false
images = true
related_topics = false
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.base_url, "https://search.example.com");
        assert!(config.autocomplete.discard_stale_responses);
        assert!(!config.panels.instant_answer);
        assert!(config.panels.images);
        assert!(!config.panels.related_topics);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[panels]\nimages = \"yes\"\n");
        assert!(result.is_err());
    }

    // Any subset of panel keys may be present; absent keys default to enabled.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_missing_panel_fields_default_to_enabled(
            instant_answer in prop::option::of(prop::bool::ANY),
            images in prop::option::of(prop::bool::ANY),
            related_topics in prop::option::of(prop::bool::ANY),
        ) {
            let mut toml_content = String::from("[panels]\n");
            if let Some(v) = instant_answer {
                toml_content.push_str(&format!("instant_answer = {}\n", v));
            }
            if let Some(v) = images {
                toml_content.push_str(&format!("images = {}\n", v));
            }
            if let Some(v) = related_topics {
                toml_content.push_str(&format!("related_topics = {}\n", v));
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let panels = config.unwrap().panels;

            prop_assert_eq!(panels.instant_answer, instant_answer.unwrap_or(true));
            prop_assert_eq!(panels.images, images.unwrap_or(true));
            prop_assert_eq!(panels.related_topics, related_topics.unwrap_or(true));
        }
    }
}
