use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use crate::autocomplete::EnterAction;
use crate::page::InputId;
use crate::panels::PanelFocus;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only process key press events (avoid duplicates)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Input(input) => self.handle_input_key(input, key),
            Focus::Panel(PanelFocus::Images) => self.handle_images_key(key),
            Focus::Panel(PanelFocus::RelatedTopics) => self.handle_topics_key(key),
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            // Esc closes dropdowns first, quits otherwise
            KeyCode::Esc => {
                if self.dismissal.has_open() {
                    self.dismiss_dropdowns(None);
                } else {
                    self.should_quit = true;
                }
                true
            }
            KeyCode::Tab => {
                self.cycle_focus(true);
                true
            }
            KeyCode::BackTab => {
                self.cycle_focus(false);
                true
            }
            _ => false,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let cycle = self.focus_cycle();
        let Some(current) = cycle.iter().position(|f| *f == self.focus) else {
            return;
        };
        let next = if forward {
            (current + 1) % cycle.len()
        } else {
            (current + cycle.len() - 1) % cycle.len()
        };
        self.focus = cycle[next];
    }

    fn handle_input_key(&mut self, input: InputId, key: KeyEvent) {
        let Some(field) = self.page.input_mut(input) else {
            return;
        };

        match key.code {
            KeyCode::Down => field.autocomplete.focus_next(),
            KeyCode::Up => field.autocomplete.focus_prev(),
            KeyCode::Enter => {
                let value = match field.autocomplete.on_enter() {
                    EnterAction::Activate(phrase) => {
                        field.set_value(&phrase);
                        phrase
                    }
                    EnterAction::Submit => field.value().to_string(),
                };
                self.submit(&value);
            }
            _ => {
                let request = field.edit(key);
                let open = field.autocomplete.is_open();
                self.dismissal.sync(input, open);
                if let Some(request) = request {
                    self.send(request);
                }
            }
        }
    }

    fn handle_images_key(&mut self, key: KeyEvent) {
        let Some(grid) = self
            .page
            .panels
            .images
            .as_mut()
            .and_then(|c| c.content_mut())
        else {
            return;
        };

        match key.code {
            KeyCode::Right => grid.select_next(),
            KeyCode::Left => grid.select_prev(),
            KeyCode::Down => grid.select_below(),
            KeyCode::Up => grid.select_above(),
            KeyCode::Enter => {
                let selected = grid.selected();
                self.open_image(selected);
            }
            _ => {}
        }
    }

    fn handle_topics_key(&mut self, key: KeyEvent) {
        let Some(list) = self
            .page
            .panels
            .related_topics
            .as_mut()
            .and_then(|c| c.content_mut())
        else {
            return;
        };

        match key.code {
            KeyCode::Down => list.select_next(),
            KeyCode::Up => list.select_prev(),
            KeyCode::Enter => {
                let selected = list.selected();
                self.open_topic(selected);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
