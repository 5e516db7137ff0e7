//! Where floating things go on screen

use ratatui::layout::Rect;

/// `width` x `height` centered in `bounds`, shrunk to fit
///
/// An odd leftover cell goes below and to the right.
pub fn centered(bounds: Rect, width: u16, height: u16) -> Rect {
    let (width, height) = (width.min(bounds.width), height.min(bounds.height));
    Rect::new(
        bounds.x + (bounds.width - width) / 2,
        bounds.y + (bounds.height - height) / 2,
        width,
        height,
    )
}

/// Area hanging under `anchor`, indented by `indent` on both sides and cut
/// off at the edge of `bounds`
pub fn below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16, indent: u16) -> Rect {
    let max_width = anchor.width.saturating_sub(indent * 2);
    Rect::new(
        anchor.x + indent,
        anchor.bottom(),
        width.min(max_width),
        height,
    )
    .intersection(bounds)
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
