use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::autocomplete::AutocompleteController;
use crate::page::InputId;
use crate::worker::FetchRequest;

/// A single-line search field with its own autocomplete controller
pub struct SearchInput {
    pub id: InputId,
    pub textarea: TextArea<'static>,
    pub autocomplete: AutocompleteController,
}

impl SearchInput {
    /// Create the field with an initial value and attach autocomplete to it
    pub fn attach(id: InputId, value: &str, discard_stale: bool) -> Self {
        Self {
            id,
            textarea: single_line(value),
            autocomplete: AutocompleteController::attach(id, discard_stale),
        }
    }

    pub fn value(&self) -> &str {
        first_line(&self.textarea)
    }

    /// Replace the value programmatically
    ///
    /// Like assigning a field's value in a form, this is not a user edit and
    /// does not notify autocomplete.
    pub fn set_value(&mut self, value: &str) {
        let style = self.textarea.cursor_style();
        self.textarea = single_line(value);
        self.textarea.set_cursor_style(style);
    }

    /// Apply an editing key
    ///
    /// Returns the suggestion request to issue when the value changed.
    pub fn edit(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        if inserts_newline(key) {
            return None;
        }

        let before = self.value().to_string();
        self.textarea.input(key);

        if self.textarea.lines().len() > 1 {
            let joined = self.textarea.lines().concat();
            self.set_value(&joined);
        }

        if self.value() == before {
            return None;
        }

        self.autocomplete.on_value_change(first_line(&self.textarea))
    }

    /// Show or hide the cursor
    pub fn set_focused(&mut self, focused: bool) {
        let style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }
}

impl std::fmt::Debug for SearchInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchInput")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("autocomplete", &self.autocomplete)
            .finish()
    }
}

fn single_line(value: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![value.to_string()]);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}

fn first_line<'a>(textarea: &'a TextArea<'_>) -> &'a str {
    textarea.lines().first().map(String::as_str).unwrap_or("")
}

fn inserts_newline(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter)
        || (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
