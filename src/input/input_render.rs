//! Search field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use super::input_state::SearchInput;
use crate::layout::{LayoutRegions, Region};

/// Render a search field into `area` and record it for clicks
pub fn render_input(
    frame: &mut Frame,
    input: &mut SearchInput,
    area: Rect,
    focused: bool,
    regions: &mut LayoutRegions,
) {
    // Set border color based on focus
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(border_color)),
    );
    input.set_focused(focused);

    frame.render_widget(&input.textarea, area);
    regions.record(Region::SearchInput(input.id), area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
