use crate::api::InstantAnswer;

/// Content of the instant answer container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstantAnswerCard {
    pub answer: String,
}

impl InstantAnswerCard {
    pub const TITLE: &'static str = "Instant Answer";

    /// A card for a real answer; `None` for a missing answer or the sentinel
    pub fn from_answer(answer: &InstantAnswer) -> Option<Self> {
        answer.text().map(|text| Self {
            answer: text.to_string(),
        })
    }
}
