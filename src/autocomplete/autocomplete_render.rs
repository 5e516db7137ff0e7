//! Autocomplete dropdown rendering
//!
//! Draws the suggestion rows of one input directly below it and records the
//! row areas for mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::autocomplete_state::AutocompleteController;
use crate::layout::{LayoutRegions, Region};
use crate::widgets::placement;

// Dropdown geometry
const MIN_DROPDOWN_WIDTH: u16 = 24;
const DROPDOWN_BORDER: u16 = 2;
const FOCUS_MARKER_WIDTH: u16 = 2;
const DROPDOWN_INDENT: u16 = 1;

/// Where the dropdown of `controller` goes, or `None` when it is closed
pub fn dropdown_area(controller: &AutocompleteController, input_area: Rect, bounds: Rect) -> Option<Rect> {
    if !controller.is_open() {
        return None;
    }

    let text_width = controller
        .rows()
        .iter()
        .map(|row| row.phrase.width())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16;
    let width = text_width
        .saturating_add(FOCUS_MARKER_WIDTH + DROPDOWN_BORDER)
        .max(MIN_DROPDOWN_WIDTH);
    let height =
        (controller.rows().len().min(u16::MAX as usize) as u16).saturating_add(DROPDOWN_BORDER);

    let area = placement::below_anchor(input_area, bounds, width, height, DROPDOWN_INDENT);
    (area.height > DROPDOWN_BORDER && area.width > DROPDOWN_BORDER).then_some(area)
}

/// Render the dropdown below `input_area`
pub fn render_dropdown(
    frame: &mut Frame,
    controller: &AutocompleteController,
    input_area: Rect,
    regions: &mut LayoutRegions,
) {
    let Some(area) = dropdown_area(controller, input_area, frame.area()) else {
        return;
    };

    let visible = (area.height - DROPDOWN_BORDER) as usize;
    // Keep the focused row on screen
    let offset = controller
        .focused()
        .map(|focused| focused.saturating_sub(visible - 1))
        .unwrap_or(0);

    let items: Vec<ListItem> = controller
        .rows()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, row)| {
            let is_focused = controller.focused() == Some(i);
            let base = if is_focused {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White).bg(Color::Black)
            };
            let marker = if is_focused { "► " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::styled(marker, base),
                Span::styled(row.emphasized.clone(), base.add_modifier(Modifier::BOLD)),
                Span::styled(row.rest.clone(), base),
            ]))
        })
        .collect();

    // Clear the background area to prevent transparency
    frame.render_widget(Clear, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, area);

    let input = controller.input();
    regions.record(Region::Dropdown(input), area);
    let rows_area = area.inner(Margin::new(1, 1));
    for line in 0..rows_area.height.min(visible as u16) {
        let index = offset + line as usize;
        if index >= controller.rows().len() {
            break;
        }
        regions.record(
            Region::SuggestionRow { input, index },
            Rect::new(rows_area.x, rows_area.y + line, rows_area.width, 1),
        );
    }
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
