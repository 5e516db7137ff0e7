//! Search backend API
//!
//! Response types for the four JSON endpoints and the async client that calls them.

mod client;
mod types;

pub use client::{
    ApiError, AUTOCOMPLETE_PATH, IMAGES_PATH, INSTANT_ANSWER_PATH, RELATED_TOPICS_PATH,
    SearchClient,
};
pub use types::{
    AutocompleteResponse, ImageResult, ImagesResponse, InstantAnswer, RelatedTopic,
    RelatedTopicsResponse, Suggestion, NO_INSTANT_ANSWER,
};
