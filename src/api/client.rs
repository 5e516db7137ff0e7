//! Async client for the search backend
//!
//! Every endpoint is a `GET` with a single URL-encoded `query` parameter and a
//! JSON body. The HTTP status is not inspected: a body that does not decode is
//! a parse failure whatever the status was.

use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    AutocompleteResponse, ImageResult, ImagesResponse, InstantAnswer, RelatedTopic,
    RelatedTopicsResponse, Suggestion,
};

pub const AUTOCOMPLETE_PATH: &str = "/api/autocomplete";
pub const INSTANT_ANSWER_PATH: &str = "/api/instant-answer";
pub const IMAGES_PATH: &str = "/api/images";
pub const RELATED_TOPICS_PATH: &str = "/api/related-topics";

/// Errors that can occur while talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or endpoint could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, DNS or transfer failure
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

/// HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SearchClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }
        // Endpoints resolve under the base path, so it must end in a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for `path` carrying `query` as the encoded `query` parameter
    ///
    /// `path` is taken relative to the base URL, keeping any prefix it has.
    pub fn endpoint(&self, path: &str, query: &str) -> Result<Url, ApiError> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().clear().append_pair("query", query);
        Ok(url)
    }

    pub async fn autocomplete(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let response: AutocompleteResponse = self.get_json(AUTOCOMPLETE_PATH, query).await?;
        Ok(response.suggestions)
    }

    pub async fn instant_answer(&self, query: &str) -> Result<InstantAnswer, ApiError> {
        self.get_json(INSTANT_ANSWER_PATH, query).await
    }

    pub async fn images(&self, query: &str) -> Result<Vec<ImageResult>, ApiError> {
        let response: ImagesResponse = self.get_json(IMAGES_PATH, query).await?;
        Ok(response.images)
    }

    pub async fn related_topics(&self, query: &str) -> Result<Vec<RelatedTopic>, ApiError> {
        let response: RelatedTopicsResponse = self.get_json(RELATED_TOPICS_PATH, query).await?;
        Ok(response.topics)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path, query)?;
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered with status {}", path, status);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
