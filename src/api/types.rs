//! Response shapes of the search backend
//!
//! Missing top-level fields decode as empty so that a sparse response is
//! treated like "nothing to show" rather than a failure.

use serde::{Deserialize, Deserializer};

/// Answer text the backend sends when it has nothing to say
pub const NO_INSTANT_ANSWER: &str = "No instant answer available.";

/// One autocomplete candidate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub phrase: String,
}

impl Suggestion {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }
}

/// `GET /api/autocomplete`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// `GET /api/instant-answer`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstantAnswer {
    #[serde(default)]
    pub answer: Option<String>,
}

impl InstantAnswer {
    /// The answer text, unless it is missing, empty, or the "no answer" sentinel
    pub fn text(&self) -> Option<&str> {
        self.answer
            .as_deref()
            .filter(|answer| !answer.is_empty() && *answer != NO_INSTANT_ANSWER)
    }
}

/// One image search hit
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

/// `GET /api/images`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub images: Vec<ImageResult>,
}

/// A related query or article
///
/// Field names follow the backend's capitalised keys.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelatedTopic {
    #[serde(rename = "Text", default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(rename = "FirstURL", default, deserialize_with = "null_as_empty")]
    pub first_url: String,
}

/// `GET /api/related-topics`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RelatedTopicsResponse {
    #[serde(default)]
    pub topics: Vec<RelatedTopic>,
}

/// Missing and `null` strings both read as empty
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
