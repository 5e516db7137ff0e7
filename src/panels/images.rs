use crate::api::ImageResult;

/// Most images shown in the grid
pub const MAX_IMAGES: usize = 8;

/// Content of the images container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGrid {
    images: Vec<ImageResult>,
    selected: usize,
}

impl ImageGrid {
    pub const TITLE: &'static str = "Images";
    pub const COLUMNS: usize = 4;

    /// Grid of the first [`MAX_IMAGES`] results; `None` when there are none
    pub fn from_results(mut images: Vec<ImageResult>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        images.truncate(MAX_IMAGES);
        Some(Self {
            images,
            selected: 0,
        })
    }

    pub fn images(&self) -> &[ImageResult] {
        &self.images
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.images.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.images.len() - 1);
    }

    /// Move a whole grid row down, staying put at the bottom
    pub fn select_below(&mut self) {
        let below = self.selected + Self::COLUMNS;
        if below < self.images.len() {
            self.selected = below;
        }
    }

    pub fn select_above(&mut self) {
        if let Some(above) = self.selected.checked_sub(Self::COLUMNS) {
            self.selected = above;
        }
    }

    /// Full-size image URL of cell `index`, if it has one
    pub fn link(&self, index: usize) -> Option<&str> {
        self.images
            .get(index)
            .map(|image| image.image.as_str())
            .filter(|url| !url.is_empty())
    }

    pub fn grid_rows(&self) -> usize {
        self.images.len().div_ceil(Self::COLUMNS)
    }
}
