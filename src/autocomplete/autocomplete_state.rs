//! Per-input autocomplete controller
//!
//! Owns the dropdown of one search input: the rendered rows, which row is
//! focused, and the sequence number of the last suggestion request.

use super::highlight::split_emphasis;
use crate::api::Suggestion;
use crate::page::InputId;
use crate::worker::FetchRequest;

/// One dropdown row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub phrase: String,
    /// Leading part shown emphasized (as long as the typed value)
    pub emphasized: String,
    /// Remainder shown plain
    pub rest: String,
}

impl SuggestionRow {
    pub fn new(phrase: String, typed: &str) -> Self {
        let (emphasized, rest) = split_emphasis(&phrase, typed);
        let (emphasized, rest) = (emphasized.to_string(), rest.to_string());
        Self {
            phrase,
            emphasized,
            rest,
        }
    }
}

/// What Enter does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterAction {
    /// A row was focused: put this phrase in the input and submit
    Activate(String),
    /// Nothing focused: submit the input as typed
    Submit,
}

#[derive(Debug)]
pub struct AutocompleteController {
    input: InputId,
    rows: Vec<SuggestionRow>,
    focused: Option<usize>,
    issued_seq: u64,
    discard_stale: bool,
}

impl AutocompleteController {
    /// Bind a controller (and its empty dropdown) to `input`
    pub fn attach(input: InputId, discard_stale: bool) -> Self {
        Self {
            input,
            rows: Vec::new(),
            focused: None,
            issued_seq: 0,
            discard_stale,
        }
    }

    pub fn input(&self) -> InputId {
        self.input
    }

    pub fn rows(&self) -> &[SuggestionRow] {
        &self.rows
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// The dropdown is shown only while it has rows
    pub fn is_open(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn close(&mut self) {
        self.rows.clear();
        self.focused = None;
    }

    /// React to a change of the input's value
    ///
    /// Always closes the dropdown. Returns the suggestion request to issue,
    /// or `None` when the value is empty.
    pub fn on_value_change(&mut self, value: &str) -> Option<FetchRequest> {
        self.close();
        self.issued_seq += 1;

        if value.is_empty() {
            return None;
        }

        Some(FetchRequest::Suggestions {
            input: self.input,
            seq: self.issued_seq,
            query: value.to_string(),
        })
    }

    /// Replace the rows with a suggestion response
    ///
    /// `query` is the value the request was issued with; it decides how much
    /// of each phrase is emphasized. Without stale discarding any response is
    /// applied, so the last one to arrive wins. Returns whether it was applied.
    pub fn apply_suggestions(&mut self, seq: u64, query: &str, suggestions: Vec<Suggestion>) -> bool {
        if self.discard_stale && seq != self.issued_seq {
            log::debug!(
                "Discarding stale suggestions for {:?} (seq {}, latest {})",
                self.input,
                seq,
                self.issued_seq
            );
            return false;
        }

        self.rows = suggestions
            .into_iter()
            .map(|suggestion| SuggestionRow::new(suggestion.phrase, query))
            .collect();
        self.focused = None;
        true
    }

    /// Down: next row, wrapping to the first
    pub fn focus_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.focused = Some(match self.focused {
            None => 0,
            Some(i) => (i + 1) % self.rows.len(),
        });
    }

    /// Up: previous row, wrapping to the last
    pub fn focus_prev(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.focused = Some(match self.focused {
            None | Some(0) => last,
            Some(i) => i - 1,
        });
    }

    pub fn on_enter(&mut self) -> EnterAction {
        let focused = self.focused;
        match focused.and_then(|i| self.activate(i)) {
            Some(phrase) => EnterAction::Activate(phrase),
            None => EnterAction::Submit,
        }
    }

    /// Select row `index`: returns its phrase and closes the dropdown
    pub fn activate(&mut self, index: usize) -> Option<String> {
        let phrase = self.rows.get(index)?.phrase.clone();
        self.close();
        Some(phrase)
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
