//! Layout module for tracking UI component regions
//!
//! Rendering records where each clickable thing ended up; mouse handling asks
//! which region sits under the pointer. Later entries are drawn on top, so
//! lookups prefer the most recently recorded region.

use ratatui::layout::{Position, Rect};

use crate::page::InputId;

/// Something on screen that reacts to clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchInput(InputId),
    /// Dropdown frame of an input (border included)
    Dropdown(InputId),
    SuggestionRow { input: InputId, index: usize },
    ImageCell(usize),
    TopicLink(usize),
}

impl Region {
    /// The dropdown this region belongs to, if it is part of one
    pub fn dropdown(&self) -> Option<InputId> {
        match self {
            Region::Dropdown(input) | Region::SuggestionRow { input, .. } => Some(*input),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct LayoutRegions {
    entries: Vec<(Region, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn record(&mut self, region: Region, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.entries.push((region, area));
        }
    }

    pub fn area_of(&self, region: Region) -> Option<Rect> {
        self.entries
            .iter()
            .rev()
            .find(|(r, _)| *r == region)
            .map(|(_, area)| *area)
    }

    /// Topmost region containing the cell at (`column`, `row`)
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let position = Position::new(column, row);
        self.entries
            .iter()
            .rev()
            .find(|(_, area)| area.contains(position))
            .map(|(region, _)| *region)
    }
}
