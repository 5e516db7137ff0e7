//! Result-page panels
//!
//! Three optional containers decorate a results page: an instant answer card,
//! an image grid and a related-topics list. Each container starts hidden and
//! becomes visible only when its fetch returns something worth showing. A
//! container disabled in the config does not exist at all, and fetching into
//! it is a no-op.

mod images;
mod instant_answer;
mod panels_render;
mod related_topics;

pub use images::{ImageGrid, MAX_IMAGES};
pub use instant_answer::InstantAnswerCard;
pub use panels_render::{PanelFocus, render_panels};
pub use related_topics::{MAX_TOPICS, TopicList};

use crate::api::{ImageResult, InstantAnswer, RelatedTopic};
use crate::config::PanelsConfig;
use crate::page::PageId;
use crate::worker::FetchRequest;

pub const INSTANT_ANSWER_CONTAINER: &str = "instant-answer-container";
pub const IMAGES_CONTAINER: &str = "images-container";
pub const RELATED_TOPICS_CONTAINER: &str = "related-topics-container";

/// A panel slot; hidden until it is given content
#[derive(Debug)]
pub struct Container<T> {
    id: &'static str,
    content: Option<T>,
}

impl<T> Container<T> {
    pub fn new(id: &'static str) -> Self {
        Self { id, content: None }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut T> {
        self.content.as_mut()
    }

    /// Fill the container and make it visible
    pub fn show(&mut self, content: T) {
        self.content = Some(content);
    }
}

/// The panel containers of one results page
#[derive(Debug)]
pub struct Panels {
    pub instant_answer: Option<Container<InstantAnswerCard>>,
    pub images: Option<Container<ImageGrid>>,
    pub related_topics: Option<Container<TopicList>>,
}

impl Panels {
    /// Containers present on a results page
    pub fn from_config(config: &PanelsConfig) -> Self {
        Self {
            instant_answer: config
                .instant_answer
                .then(|| Container::new(INSTANT_ANSWER_CONTAINER)),
            images: config.images.then(|| Container::new(IMAGES_CONTAINER)),
            related_topics: config
                .related_topics
                .then(|| Container::new(RELATED_TOPICS_CONTAINER)),
        }
    }

    /// No containers (pages other than results)
    pub fn none() -> Self {
        Self {
            instant_answer: None,
            images: None,
            related_topics: None,
        }
    }

    pub fn fetch_instant_answer(&self, page: PageId, query: &str) -> Option<FetchRequest> {
        self.instant_answer.as_ref()?;
        (!query.is_empty()).then(|| FetchRequest::InstantAnswer {
            page,
            query: query.to_string(),
        })
    }

    pub fn fetch_images(&self, page: PageId, query: &str) -> Option<FetchRequest> {
        self.images.as_ref()?;
        (!query.is_empty()).then(|| FetchRequest::Images {
            page,
            query: query.to_string(),
        })
    }

    pub fn fetch_related_topics(&self, page: PageId, query: &str) -> Option<FetchRequest> {
        self.related_topics.as_ref()?;
        (!query.is_empty()).then(|| FetchRequest::RelatedTopics {
            page,
            query: query.to_string(),
        })
    }

    /// All three fetches for `query`, for the containers that exist
    pub fn fetch_all(&self, page: PageId, query: &str) -> Vec<FetchRequest> {
        [
            self.fetch_instant_answer(page, query),
            self.fetch_images(page, query),
            self.fetch_related_topics(page, query),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn apply_instant_answer(&mut self, answer: &InstantAnswer) {
        let Some(container) = self.instant_answer.as_mut() else {
            return;
        };
        if let Some(card) = InstantAnswerCard::from_answer(answer) {
            container.show(card);
        }
    }

    pub fn apply_images(&mut self, images: Vec<ImageResult>) {
        let Some(container) = self.images.as_mut() else {
            return;
        };
        if let Some(grid) = ImageGrid::from_results(images) {
            container.show(grid);
        }
    }

    pub fn apply_related_topics(&mut self, topics: Vec<RelatedTopic>) {
        let Some(container) = self.related_topics.as_mut() else {
            return;
        };
        if let Some(list) = TopicList::from_topics(topics) {
            container.show(list);
        }
    }

    pub fn images_visible(&self) -> bool {
        self.images.as_ref().is_some_and(Container::is_visible)
    }

    pub fn related_topics_visible(&self) -> bool {
        self.related_topics.as_ref().is_some_and(Container::is_visible)
    }

    pub fn any_visible(&self) -> bool {
        self.instant_answer.as_ref().is_some_and(Container::is_visible)
            || self.images_visible()
            || self.related_topics_visible()
    }
}
