//! Mouse click handling
//!
//! A click first does whatever the region under the pointer does, then the
//! outside-click dismissal sees it, like a document-level listener would.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::{App, Focus};
use crate::layout::Region;
use crate::panels::PanelFocus;

impl App {
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let region = self.regions.region_at(mouse.column, mouse.row);
            handle_click(self, region);
        }
    }
}

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    let mut submission = None;

    match region {
        Some(Region::SuggestionRow { input, index }) => {
            if let Some(field) = app.page.input_mut(input)
                && let Some(phrase) = field.autocomplete.activate(index)
            {
                field.set_value(&phrase);
                app.dismissal.sync(input, false);
                submission = Some(phrase);
            }
        }
        Some(Region::SearchInput(input)) => app.focus = Focus::Input(input),
        Some(Region::ImageCell(index)) => click_image(app, index),
        Some(Region::TopicLink(index)) => click_topic(app, index),
        Some(Region::Dropdown(_)) | None => {}
    }

    app.dismiss_dropdowns(region.and_then(|r| r.dropdown()));

    if let Some(phrase) = submission {
        app.submit(&phrase);
    }
}

fn click_image(app: &mut App, index: usize) {
    if let Some(grid) = app.page.panels.images.as_mut().and_then(|c| c.content_mut()) {
        grid.select(index);
        app.focus = Focus::Panel(PanelFocus::Images);
    }
    app.open_image(index);
}

fn click_topic(app: &mut App, index: usize) {
    if let Some(list) = app
        .page
        .panels
        .related_topics
        .as_mut()
        .and_then(|c| c.content_mut())
    {
        list.select(index);
        app.focus = Focus::Panel(PanelFocus::RelatedTopics);
    }
    app.open_topic(index);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
