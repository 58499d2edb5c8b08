//! Print guides and placeholder boxes.
//!
//! Every overlay is always built; its `visible` flag carries the toggle.

use crate::metrics::*;
use crate::scene::{Group, Line, Rect, Style, ids};

/// Red bleed lines inset from each trim edge.
pub(super) fn bleed(visible: bool) -> Group {
    Group::new(ids::BLEED)
        .style(Style::dashed(BLEED_COLOR, 20.0).stroke_width(2.0))
        .visible(visible)
        .child(Line::horizontal("bottomBleed", CANVAS_HEIGHT - BLEED_INSET, CANVAS_WIDTH))
        .child(Line::vertical("rightBleed", CANVAS_WIDTH - BLEED_INSET, CANVAS_HEIGHT))
        .child(Line::horizontal("TopMargin", BLEED_INSET, CANVAS_WIDTH))
        .child(Line::vertical("LeftMargin", BLEED_INSET, CANVAS_HEIGHT))
}

/// Cyan safe-area and center guides.
pub(super) fn margins(visible: bool) -> Group {
    Group::new(ids::GUIDES)
        .style(Style::dashed(GUIDE_COLOR, 80.0).stroke_width(2.0))
        .visible(visible)
        .child(Line::vertical("left", SAFE_MARGIN, CANVAS_HEIGHT))
        .child(Line::horizontal("top", SAFE_MARGIN, CANVAS_WIDTH))
        .child(Line::horizontal("middle", CENTER_Y, CANVAS_WIDTH))
        .child(Line::vertical("center", CENTER_X, CANVAS_HEIGHT))
        .child(Line::horizontal("bottom", CANVAS_HEIGHT - SAFE_MARGIN, CANVAS_WIDTH))
        .child(Line::vertical("right", CANVAS_WIDTH - SAFE_MARGIN, CANVAS_HEIGHT))
}

/// Dashed box marking where a QR code or barcode goes.
pub(super) fn placeholder(
    id: &str,
    (x, y, width, height): (f64, f64, f64, f64),
    color: &str,
    visible: bool,
) -> Rect {
    Rect::new(x, y, width, height)
        .id(id)
        .style(Style::dashed(color, PLACEHOLDER_DASH))
        .visible(visible)
}
