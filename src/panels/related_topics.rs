use crate::api::RelatedTopic;

/// Most topics considered for the list
pub const MAX_TOPICS: usize = 5;

/// Content of the related topics container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicList {
    topics: Vec<RelatedTopic>,
    selected: usize,
}

impl TopicList {
    pub const TITLE: &'static str = "Related Topics";

    /// List built from the first [`MAX_TOPICS`] topics, minus those without
    /// text; `None` only when no topics were returned at all
    pub fn from_topics(topics: Vec<RelatedTopic>) -> Option<Self> {
        if topics.is_empty() {
            return None;
        }
        let topics = topics
            .into_iter()
            .take(MAX_TOPICS)
            .filter(|topic| !topic.text.is_empty())
            .collect();
        Some(Self {
            topics,
            selected: 0,
        })
    }

    pub fn topics(&self) -> &[RelatedTopic] {
        &self.topics
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.topics.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if !self.topics.is_empty() {
            self.selected = (self.selected + 1) % self.topics.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.topics.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.topics.len() - 1);
        }
    }

    pub fn link(&self, index: usize) -> Option<&str> {
        self.topics
            .get(index)
            .map(|topic| topic.first_url.as_str())
            .filter(|url| !url.is_empty())
    }
}
