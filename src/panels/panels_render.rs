//! Panel rendering
//!
//! Visible containers are stacked top to bottom in a fixed order: instant
//! answer, images, related topics. Hidden or absent containers take no space.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::{ImageGrid, InstantAnswerCard, Panels, TopicList};
use crate::layout::{LayoutRegions, Region};

const PANEL_BORDER: u16 = 2;
const IMAGE_CELL_HEIGHT: u16 = 3;
const MAX_ANSWER_HEIGHT: u16 = 12;

/// Which link panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    Images,
    RelatedTopics,
}

/// Render every visible panel into `area`
pub fn render_panels(
    frame: &mut Frame,
    area: Rect,
    panels: &Panels,
    focus: Option<PanelFocus>,
    regions: &mut LayoutRegions,
) {
    let answer = panels.instant_answer.as_ref().and_then(|c| c.content());
    let images = panels.images.as_ref().and_then(|c| c.content());
    let topics = panels.related_topics.as_ref().and_then(|c| c.content());

    let mut constraints = Vec::new();
    if let Some(card) = answer {
        constraints.push(Constraint::Length(answer_height(card, area.width)));
    }
    if let Some(grid) = images {
        constraints.push(Constraint::Length(
            PANEL_BORDER + grid.grid_rows() as u16 * IMAGE_CELL_HEIGHT,
        ));
    }
    if let Some(list) = topics {
        constraints.push(Constraint::Length(
            PANEL_BORDER + list.topics().len().max(1) as u16,
        ));
    }
    constraints.push(Constraint::Min(0));

    let areas = Layout::vertical(constraints).split(area);
    let mut next = areas.iter().copied();

    if let (Some(card), Some(slot)) = (answer, next.next()) {
        render_instant_answer(frame, slot, card);
    }
    if let (Some(grid), Some(slot)) = (images, next.next()) {
        render_images(frame, slot, grid, focus == Some(PanelFocus::Images), regions);
    }
    if let (Some(list), Some(slot)) = (topics, next.next()) {
        render_related_topics(
            frame,
            slot,
            list,
            focus == Some(PanelFocus::RelatedTopics),
            regions,
        );
    }
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border_color))
}

/// Rows needed for the wrapped answer plus borders
fn answer_height(card: &InstantAnswerCard, width: u16) -> u16 {
    let inner = width.saturating_sub(PANEL_BORDER).max(1) as usize;
    let lines: usize = card
        .answer
        .lines()
        .map(|line| line.width().div_ceil(inner).max(1))
        .sum();
    (lines.max(1) as u16 + PANEL_BORDER).min(MAX_ANSWER_HEIGHT)
}

fn render_instant_answer(frame: &mut Frame, area: Rect, card: &InstantAnswerCard) {
    let paragraph = Paragraph::new(card.answer.as_str())
        .block(panel_block(InstantAnswerCard::TITLE, false))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_images(
    frame: &mut Frame,
    area: Rect,
    grid: &ImageGrid,
    focused: bool,
    regions: &mut LayoutRegions,
) {
    let block = panel_block(ImageGrid::TITLE, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_areas = Layout::vertical(vec![
        Constraint::Length(IMAGE_CELL_HEIGHT);
        grid.grid_rows()
    ])
    .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, ImageGrid::COLUMNS as u32);
            ImageGrid::COLUMNS
        ])
        .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * ImageGrid::COLUMNS + column;
            let Some(image) = grid.images().get(index) else {
                break;
            };

            let selected = focused && grid.selected() == index;
            let border_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let title = if image.title.is_empty() {
                "(untitled)"
            } else {
                image.title.as_str()
            };

            let paragraph = Paragraph::new(Span::styled(title, Style::default().fg(Color::White)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(paragraph, *cell);
            regions.record(Region::ImageCell(index), *cell);
        }
    }
}

fn render_related_topics(
    frame: &mut Frame,
    area: Rect,
    list: &TopicList,
    focused: bool,
    regions: &mut LayoutRegions,
) {
    let block = panel_block(TopicList::TITLE, focused);
    let inner = block.inner(area);

    let lines: Vec<Line> = list
        .topics()
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let mut style = Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED);
            if focused && list.selected() == i {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![Span::raw("• "), Span::styled(topic.text.as_str(), style)])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    for i in 0..list.topics().len().min(inner.height as usize) {
        regions.record(
            Region::TopicLink(i),
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
        );
    }
}

#[cfg(test)]
#[path = "panels_render_tests.rs"]
mod panels_render_tests;
